//! Field visibility derived from form state.
//!
//! A front end shows exactly the fields in [`ViewModel::visible_fields`] and
//! recomputes the view model after every edit; nothing is toggled in place.

use serde::Serialize;
use setupkit_designer::ShapeType;
use std::collections::BTreeSet;

use crate::form::FormState;

/// Every input control a front end may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    Shape,
    XyzUnits,
    X1,
    X2,
    Y1,
    Y2,
    ZAxisToggle,
    Z1,
    Z2,
    EndMillUnits,
    EndMillDiameter,
    SpecificLocationToggle,
    OffsetRight,
    OffsetTop,
    VertexX(usize),
    VertexY(usize),
    AddVertex,
    RemoveVertex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub visible_fields: BTreeSet<Field>,
}

impl ViewModel {
    pub fn derive(form: &FormState) -> Self {
        let mut visible = BTreeSet::from([
            Field::Shape,
            Field::XyzUnits,
            Field::X1,
            Field::X2,
            Field::Y1,
            Field::Y2,
            Field::ZAxisToggle,
            Field::EndMillUnits,
            Field::EndMillDiameter,
            Field::SpecificLocationToggle,
        ]);

        if form.z_axis_enabled {
            visible.extend([Field::Z1, Field::Z2]);
        }

        if form.specific_location {
            visible.extend([Field::OffsetRight, Field::OffsetTop]);
        }

        if form.shape.parse::<ShapeType>().ok() == Some(ShapeType::Polygon) {
            for i in 0..form.vertices.len() {
                visible.extend([Field::VertexX(i), Field::VertexY(i)]);
            }
            visible.extend([Field::AddVertex, Field::RemoveVertex]);
        }

        Self {
            visible_fields: visible,
        }
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.visible_fields.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::VertexRow;

    #[test]
    fn test_default_form_fields() {
        let vm = ViewModel::derive(&FormState::default());
        assert_eq!(vm.visible_fields.len(), 10);
        assert!(vm.is_visible(Field::EndMillDiameter));
        assert!(!vm.is_visible(Field::Z1));
        assert!(!vm.is_visible(Field::OffsetRight));
        assert!(!vm.is_visible(Field::AddVertex));
    }

    #[test]
    fn test_toggles_reveal_fields() {
        let form = FormState {
            z_axis_enabled: true,
            specific_location: true,
            ..FormState::default()
        };
        let vm = ViewModel::derive(&form);
        for field in [Field::Z1, Field::Z2, Field::OffsetRight, Field::OffsetTop] {
            assert!(vm.is_visible(field), "{field:?} should be visible");
        }
    }

    #[test]
    fn test_polygon_rows() {
        let form = FormState {
            shape: "Polygon".into(),
            vertices: vec![VertexRow::new("0", "0"), VertexRow::new("1", "0")],
            ..FormState::default()
        };
        let vm = ViewModel::derive(&form);
        assert!(vm.is_visible(Field::VertexX(1)));
        assert!(vm.is_visible(Field::VertexY(1)));
        assert!(!vm.is_visible(Field::VertexX(2)));
        assert!(vm.is_visible(Field::AddVertex));
        assert!(vm.is_visible(Field::RemoveVertex));
    }

    #[test]
    fn test_vertex_rows_hidden_for_other_shapes() {
        let form = FormState {
            shape: "Circle".into(),
            vertices: vec![VertexRow::new("0", "0")],
            ..FormState::default()
        };
        assert!(!ViewModel::derive(&form).is_visible(Field::VertexX(0)));
    }

    #[test]
    fn test_derive_is_deterministic() {
        let form = FormState {
            z_axis_enabled: true,
            ..FormState::default()
        };
        assert_eq!(ViewModel::derive(&form), ViewModel::derive(&form));
    }
}
