use super::*;
use crate::table::Table;

const SAMPLE_CSV: &str = "ID;DATE_TIME;C_INLET;VELOCITY\n\
S1;2020-01-01 00:00:00;10.0;2.0\n\
S2;2020-01-01 01:00:00;8.5;1.5\n";

fn sample_table() -> Table {
    Table::from_reader(std::io::Cursor::new(SAMPLE_CSV)).unwrap()
}

#[test]
fn test_projection_is_index_aligned() {
    let binding = FieldBinding::new("ID", "DATE_TIME", "C_INLET", "VELOCITY");
    let columns = project(&binding, &sample_table()).unwrap();

    assert_eq!(columns.len(), 2);
    assert_eq!(columns.ids, vec!["S1", "S2"]);
    assert_eq!(
        columns.timestamps,
        vec!["2020-01-01 00:00:00", "2020-01-01 01:00:00"]
    );
    assert_eq!(columns.concentrations, vec!["10.0", "8.5"]);
    assert_eq!(columns.velocities, vec!["2.0", "1.5"]);
    assert_eq!(columns.concentration_field, "C_INLET");
}

#[test]
fn test_unbound_roles_are_all_listed() {
    let binding = FieldBinding {
        id: Some("ID".to_string()),
        time: None,
        concentration: None,
        velocity: Some("VELOCITY".to_string()),
    };

    let err = binding.resolve(&sample_table()).unwrap_err();
    match err {
        MappingError::UnboundRoles(roles) => {
            assert_eq!(
                roles,
                vec![FieldRole::MeasuredAt, FieldRole::InletConcentration]
            );
        }
        other => panic!("expected UnboundRoles, got {other:?}"),
    }
}

#[test]
fn test_unbound_role_message_names_every_role() {
    let err = FieldBinding::default().resolve(&sample_table()).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Sample ID"));
    assert!(message.contains("Measurement time"));
    assert!(message.contains("Concentration measured at the inlet"));
    assert!(message.contains("Average velocity of the stream at the inlet"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let binding = FieldBinding::new("ID", "DATE_TIME", "C_OUTLET", "VELOCITY");

    let err = binding.resolve(&sample_table()).unwrap_err();
    match err {
        MappingError::UnknownField { role, field } => {
            assert_eq!(role, FieldRole::InletConcentration);
            assert_eq!(field, "C_OUTLET");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn test_duplicate_bindings_are_allowed() {
    // Two roles may point at the same column
    let binding = FieldBinding::new("ID", "DATE_TIME", "C_INLET", "C_INLET");
    let columns = project(&binding, &sample_table()).unwrap();

    assert_eq!(columns.concentrations, columns.velocities);
}

#[test]
fn test_projection_of_empty_table() {
    let table = Table::from_reader(std::io::Cursor::new("ID;DATE_TIME;C_INLET;VELOCITY\n"))
        .unwrap();
    let binding = FieldBinding::new("ID", "DATE_TIME", "C_INLET", "VELOCITY");

    let columns = project(&binding, &table).unwrap();
    assert!(columns.is_empty());
}
