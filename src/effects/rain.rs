//! Decorative matrix/binary rain for the loading splash.
//!
//! Generation is split in two: pure spec builders that take an injected
//! randomness source, and a thin DOM layer that materializes the specs.
//! Column and stream counts scale with the viewport width measured once at
//! spawn time; the rain does not react to later resizes.

use web_sys::Document;

use crate::config::{BINARY_STREAM_STRIDE_PX, MATRIX_COLUMN_STRIDE_PX};

/// Glyph pool for the matrix columns.
pub const MATRIX_GLYPHS: &str =
    "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

const MATRIX_GLYPHS_PER_COLUMN: usize = 20;
const BITS_PER_STREAM: usize = 30;
const BITS_PER_ROW: usize = 8;

/// One falling element: placement, randomized timing, and its glyph markup.
#[derive(Debug)]
pub struct RainSpec {
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub markup: String,
}

pub fn matrix_column_count(viewport_width: u32) -> u32 {
    viewport_width / MATRIX_COLUMN_STRIDE_PX
}

pub fn binary_stream_count(viewport_width: u32) -> u32 {
    viewport_width / BINARY_STREAM_STRIDE_PX
}

/// Build the matrix column specs for a viewport. Columns are spread evenly;
/// fall duration and start delay are randomized per column.
pub fn matrix_columns(viewport_width: u32, rng: &mut dyn FnMut() -> f64) -> Vec<RainSpec> {
    let count = matrix_column_count(viewport_width);
    let glyphs: Vec<char> = MATRIX_GLYPHS.chars().collect();
    (0..count)
        .map(|i| {
            let mut markup = String::new();
            for _ in 0..MATRIX_GLYPHS_PER_COLUMN {
                let idx = (rng() * glyphs.len() as f64) as usize % glyphs.len();
                markup.push(glyphs[idx]);
                markup.push_str("<br>");
            }
            RainSpec {
                left_pct: f64::from(i) * (100.0 / f64::from(count)),
                duration_s: rng() * 3.0 + 2.0,
                delay_s: rng() * 2.0,
                markup,
            }
        })
        .collect()
}

/// Build the binary stream specs for a viewport. Streams land at random
/// horizontal positions; bits are grouped eight to a row.
pub fn binary_streams(viewport_width: u32, rng: &mut dyn FnMut() -> f64) -> Vec<RainSpec> {
    (0..binary_stream_count(viewport_width))
        .map(|_| {
            let mut markup = String::new();
            for j in 0..BITS_PER_STREAM {
                markup.push(if rng() > 0.5 { '1' } else { '0' });
                if j % BITS_PER_ROW == BITS_PER_ROW - 1 {
                    markup.push_str("<br>");
                }
            }
            RainSpec {
                left_pct: rng() * 100.0,
                duration_s: rng() * 4.0 + 3.0,
                delay_s: rng() * 3.0,
                markup,
            }
        })
        .collect()
}

/// Fill both rain containers for the current viewport width.
pub fn spawn_rain(document: &Document) {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0) as u32;
    let mut rng = || web_sys::js_sys::Math::random();

    fill_container(
        document,
        "matrixRain",
        "matrix-column",
        matrix_columns(width, &mut rng),
    );
    fill_container(
        document,
        "binaryRain",
        "binary-stream",
        binary_streams(width, &mut rng),
    );
}

fn fill_container(document: &Document, container_id: &str, class: &str, specs: Vec<RainSpec>) {
    let container = match document.get_element_by_id(container_id) {
        Some(el) => el,
        None => {
            log::warn!("rain container #{} is missing, skipping", container_id);
            return;
        }
    };
    for spec in specs {
        if let Ok(el) = document.create_element("div") {
            el.set_class_name(class);
            let _ = el.set_attribute(
                "style",
                &format!(
                    "left: {:.4}%; animation-duration: {:.3}s; animation-delay: {:.3}s;",
                    spec.left_pct, spec.duration_s, spec.delay_s
                ),
            );
            el.set_inner_html(&spec.markup);
            let _ = container.append_child(&el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn counts_scale_with_viewport_width() {
        assert_eq!(matrix_column_count(0), 0);
        assert_eq!(matrix_column_count(29), 0);
        assert_eq!(matrix_column_count(30), 1);
        assert_eq!(matrix_column_count(1920), 64);
        assert_eq!(binary_stream_count(19), 0);
        assert_eq!(binary_stream_count(1920), 96);
        // very large widths stay well-defined
        assert_eq!(matrix_column_count(u32::MAX), u32::MAX / 30);
        assert_eq!(binary_stream_count(u32::MAX), u32::MAX / 20);
    }

    #[test]
    fn narrow_viewport_yields_no_columns() {
        let mut rng = fixed(0.5);
        assert!(matrix_columns(29, &mut rng).is_empty());
        assert!(binary_streams(19, &mut rng).is_empty());
    }

    #[test]
    fn columns_are_spread_evenly_with_full_glyph_runs() {
        let mut rng = fixed(0.0);
        let columns = matrix_columns(300, &mut rng);
        assert_eq!(columns.len(), 10);
        for (i, col) in columns.iter().enumerate() {
            assert!((col.left_pct - i as f64 * 10.0).abs() < 1e-9);
            assert_eq!(col.markup.matches("<br>").count(), MATRIX_GLYPHS_PER_COLUMN);
        }
    }

    #[test]
    fn rng_edge_values_never_index_out_of_bounds() {
        // a source pinned at the top of the range must still pick a glyph
        let mut rng = fixed(1.0);
        let columns = matrix_columns(60, &mut rng);
        assert_eq!(columns.len(), 2);
        for col in &columns {
            assert!(!col.markup.is_empty());
        }
    }

    #[test]
    fn binary_rows_group_eight_bits() {
        let mut rng = fixed(0.75);
        let streams = binary_streams(20, &mut rng);
        assert_eq!(streams.len(), 1);
        let markup = &streams[0].markup;
        assert_eq!(markup.matches('1').count() + markup.matches('0').count(), 30);
        // 30 bits -> a break after bits 8, 16, and 24
        assert_eq!(markup.matches("<br>").count(), 3);
        assert!(markup.starts_with("11111111<br>"));
    }

    #[test]
    fn randomized_timing_stays_inside_authored_ranges() {
        let mut turn = 0usize;
        let mut rng = move || {
            turn += 1;
            if turn % 2 == 0 {
                0.999
            } else {
                0.0
            }
        };
        for spec in matrix_columns(300, &mut rng) {
            assert!((2.0..5.0).contains(&spec.duration_s));
            assert!((0.0..2.0).contains(&spec.delay_s));
        }
    }
}
