//! Text measurement helpers.

use eframe::egui;

const ELLIPSIS: &str = "…";

/// Shortens `text` so it fits in `available_width`, ending in an ellipsis
/// when anything was cut.
///
/// # Arguments
/// * `text` - Text to fit
/// * `available_width` - Width in points, including 4pt padding per side
/// * `font_id` - Font used for measuring
/// * `painter` - Painter providing text layout
pub fn elide_to_width(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let max_width = available_width - 8.0;
    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |s: &str| {
        painter
            .layout_no_wrap(s.to_owned(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if measure(text) <= max_width {
        return text.to_owned();
    }

    let budget = max_width - measure(ELLIPSIS);
    if budget <= 0.0 {
        return String::new();
    }

    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).chain([text.len()]).collect();
    let keep = longest_fitting_prefix(boundaries.len() - 1, |chars| measure(&text[..boundaries[chars]]) <= budget);

    format!("{}{}", &text[..boundaries[keep]], ELLIPSIS)
}

/// Largest `n` in `0..=max` with `fits(n)`, assuming `fits` is monotone.
fn longest_fitting_prefix(max: usize, fits: impl Fn(usize) -> bool) -> usize {
    let (mut low, mut high) = (0, max);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if fits(mid) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_fitting_prefix() {
        assert_eq!(longest_fitting_prefix(10, |n| n <= 4), 4);
        assert_eq!(longest_fitting_prefix(10, |_| true), 10);
        assert_eq!(longest_fitting_prefix(10, |n| n == 0), 0);
        assert_eq!(longest_fitting_prefix(0, |_| false), 0);
    }
}
