//! Categorical-to-numeric feature mapping.

use crate::annotation::AnnotationRow;
use crate::config::FEATURE_DIM;

/// Map annotation rows to the binary feature matrix used for clustering.
///
/// Pure per-row, per-column mapping: yes -> 1.0, no -> 0.0. Output order
/// matches input order.
pub fn feature_matrix(rows: &[AnnotationRow]) -> Vec<[f32; FEATURE_DIM]> {
    rows.iter().map(AnnotationRow::feature_vector).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Label;

    fn row(name: &str, cream: Label, fruits: Label, sprinkles: Label) -> AnnotationRow {
        AnnotationRow {
            file_name: name.to_string(),
            cream,
            fruits,
            sprinkle_toppings: sprinkles,
        }
    }

    #[test]
    fn test_mapping_is_per_column() {
        let rows = vec![
            row("a.jpg", Label::Yes, Label::No, Label::Yes),
            row("b.jpg", Label::No, Label::Yes, Label::No),
        ];

        let matrix = feature_matrix(&rows);

        assert_eq!(matrix, vec![[1.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_empty_table_maps_to_empty_matrix() {
        assert!(feature_matrix(&[]).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let rows: Vec<AnnotationRow> = (0..5)
            .map(|i| {
                let label = if i % 2 == 0 { Label::Yes } else { Label::No };
                row(&format!("{i}.jpg"), label, label, label)
            })
            .collect();

        let matrix = feature_matrix(&rows);

        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix[0], [1.0, 1.0, 1.0]);
        assert_eq!(matrix[1], [0.0, 0.0, 0.0]);
    }
}
