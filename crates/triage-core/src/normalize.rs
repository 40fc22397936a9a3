//! # Input Normalization
//!
//! Folds a description and its image labels into the single lowercase text
//! every later stage matches against.

/// Join `description` and the space-joined `image_labels`, then lowercase.
///
/// A single space always separates the description from the labels, even
/// when either side is empty. No trimming or tokenization is performed.
#[must_use]
pub fn normalize<S: AsRef<str>>(description: &str, image_labels: &[S]) -> String {
    let labels_len: usize = image_labels.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut text = String::with_capacity(description.len() + 1 + labels_len);

    text.push_str(description);
    text.push(' ');
    for (i, label) in image_labels.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(label.as_ref());
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_description_and_labels() {
        let text = normalize("Huge POTHOLE", &["Road", "Asphalt"]);
        assert_eq!(text, "huge pothole road asphalt");
    }

    #[test]
    fn empty_inputs_yield_single_space() {
        let text = normalize::<&str>("", &[]);
        assert_eq!(text, " ");
    }

    #[test]
    fn no_trimming() {
        let text = normalize::<String>("  spaced  ", &[]);
        assert_eq!(text, "  spaced   ");
    }

    #[test]
    fn labels_concatenate_with_keywords_inside() {
        // Labels are glued by spaces only, so substrings can span the seam.
        let text = normalize("gas", &["leak"]);
        assert!(text.contains("gas leak"));
    }
}
