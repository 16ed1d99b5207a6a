//! Rendering of centered triangle and diamond shapes

use std::io::Write;

use itertools::Itertools;
use pascal_core::{BinomialGenerator, StrategyKind};

use crate::error::CliError;

/// Rows in the classic triangle demonstration
pub const TRIANGLE_ROWS: u32 = 10;
/// Centering half-width for the triangle
pub const TRIANGLE_HALF_WIDTH: usize = 15;
/// Rows in the widening half of the diamond
pub const DIAMOND_ROWS: u32 = 13;
/// Centering half-width for the diamond
pub const DIAMOND_HALF_WIDTH: usize = 25;

/// Prints the triangle: `rows` rows top-down, then one blank line.
pub fn print_triangle(
    generator: &BinomialGenerator,
    rows: u32,
    half_width: usize,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for row in 0..rows {
        writeln!(out, "{}", centered_row(generator, row, half_width)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Prints the diamond: ascending rows, then the same rows descending with
/// the widest row skipped, then one blank line.
pub fn print_diamond(
    generator: &BinomialGenerator,
    rows: u32,
    half_width: usize,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for row in 0..rows {
        writeln!(out, "{}", centered_row(generator, row, half_width)?)?;
    }
    for row in (0..rows.saturating_sub(1)).rev() {
        writeln!(out, "{}", centered_row(generator, row, half_width)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// The three classic demonstrations, in order: triangle by recurrence,
/// triangle by factorials, diamond by recurrence.
pub fn print_demo(out: &mut impl Write) -> Result<(), CliError> {
    let triangle = BinomialGenerator::new(StrategyKind::Triangle);
    print_triangle(&triangle, TRIANGLE_ROWS, TRIANGLE_HALF_WIDTH, out)?;

    let factorial = BinomialGenerator::new(StrategyKind::Factorial);
    print_triangle(&factorial, TRIANGLE_ROWS, TRIANGLE_HALF_WIDTH, out)?;

    let diamond = BinomialGenerator::new(StrategyKind::Triangle);
    print_diamond(&diamond, DIAMOND_ROWS, DIAMOND_HALF_WIDTH, out)
}

/// One row of coefficients joined by single spaces, left-padded until half
/// the content length (truncating division) reaches `half_width`.
fn centered_row(
    generator: &BinomialGenerator,
    row: u32,
    half_width: usize,
) -> Result<String, CliError> {
    let values: Vec<u64> = (0..=row)
        .map(|col| generator.coefficient(row, col))
        .collect::<Result<_, _>>()?;
    let content = values.iter().join(" ");
    let pad = half_width.saturating_sub(content.len() / 2);
    Ok(format!("{}{}", " ".repeat(pad), content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_lines(render: impl FnOnce(&mut Vec<u8>)) -> Vec<String> {
        let mut buf = Vec::new();
        render(&mut buf);
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn triangle_lines(kind: StrategyKind) -> Vec<String> {
        rendered_lines(|buf| {
            let generator = BinomialGenerator::new(kind);
            print_triangle(&generator, TRIANGLE_ROWS, TRIANGLE_HALF_WIDTH, buf).unwrap();
        })
    }

    #[test]
    fn first_rows_hold_the_expected_values() {
        let lines = triangle_lines(StrategyKind::Triangle);

        assert_eq!(lines[0].trim_start(), "1");
        assert_eq!(lines[1].trim_start(), "1 1");
        assert_eq!(lines[2].trim_start(), "1 2 1");
    }

    #[test]
    fn padding_uses_truncating_half_length() {
        let lines = triangle_lines(StrategyKind::Triangle);

        // "1" has half-length 0, "1 1" half-length 1, "1 2 1" half-length 2
        assert_eq!(lines[0], format!("{}1", " ".repeat(15)));
        assert_eq!(lines[1], format!("{}1 1", " ".repeat(14)));
        assert_eq!(lines[2], format!("{}1 2 1", " ".repeat(13)));
    }

    #[test]
    fn triangle_ends_with_one_blank_line() {
        let lines = triangle_lines(StrategyKind::Triangle);

        assert_eq!(lines.len(), TRIANGLE_ROWS as usize + 1);
        assert!(lines[..TRIANGLE_ROWS as usize].iter().all(|l| !l.is_empty()));
        assert_eq!(lines[TRIANGLE_ROWS as usize], "");
    }

    #[test]
    fn both_strategies_render_the_same_triangle() {
        assert_eq!(
            triangle_lines(StrategyKind::Triangle),
            triangle_lines(StrategyKind::Factorial)
        );
    }

    #[test]
    fn diamond_shape_and_line_count() {
        let lines = rendered_lines(|buf| {
            let generator = BinomialGenerator::new(StrategyKind::Triangle);
            print_diamond(&generator, DIAMOND_ROWS, DIAMOND_HALF_WIDTH, buf).unwrap();
        });

        let non_blank: Vec<&String> = lines.iter().filter(|l| !l.is_empty()).collect();
        assert_eq!(non_blank.len(), 25);

        // the widest row (row 12, peaking at C(12, 6) = 924) appears once
        let widest: Vec<&&String> = non_blank.iter().filter(|l| l.contains("924")).collect();
        assert_eq!(widest.len(), 1);
        assert_eq!(non_blank[12], *widest[0]);

        // the silhouette is vertically symmetric around the widest row
        for i in 0..non_blank.len() {
            assert_eq!(non_blank[i], non_blank[24 - i], "asymmetry at line {}", i);
        }
    }

    #[test]
    fn demo_prints_three_shapes_with_identical_triangles() {
        let mut buf = Vec::new();
        print_demo(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let blocks: Vec<&str> = text.split("\n\n").collect();
        // three shapes, each terminated by one blank line
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[3], "");
        // the two triangle demonstrations agree byte for byte
        assert_eq!(blocks[0], blocks[1]);
        assert_ne!(blocks[1], blocks[2]);
    }

    #[test]
    fn overflow_from_oversized_rows_is_surfaced() {
        let generator = BinomialGenerator::new(StrategyKind::Triangle);
        let mut buf = Vec::new();

        let result = print_triangle(&generator, 100, TRIANGLE_HALF_WIDTH, &mut buf);
        assert!(matches!(result, Err(CliError::Compute(_))));
    }
}
