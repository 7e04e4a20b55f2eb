use frameguard_core::{ColumnType, Table, ValidationConfig, Validator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("frameguard example - people validation\n");

    let validator = Validator::new(
        ValidationConfig::builder()
            .with_column_type("age", ColumnType::Integer)
            .with_column_type("name", ColumnType::String)
            .with_column_type("score", ColumnType::Float)
            .allow_null("score")
            .between("age", 0, 120)
            .between("score", 0.0, 1.0)
            .build(),
    );

    let clean = Table::new()
        .with_column("age", vec![25i64, 30, 41])?
        .with_column("name", vec!["Alice", "Bob", "Carol"])?
        .with_column("score", vec![Some(0.7f64), None, Some(0.2)])?;

    let dirty = Table::new()
        .with_column("age", vec![25i64, 130, 150])?
        .with_column("name", vec!["Alice", "Bob", "Carol"])?
        .with_column("score", vec![Some(0.7f64), None, Some(0.2)])?;

    for (name, table) in [("clean", &clean), ("dirty", &dirty)] {
        match validator.validate(table) {
            Ok(()) => println!("{}: passed", name),
            Err(e) => println!("{}: failed [{}]\n{}\n", name, e.kind(), e),
        }
    }

    Ok(())
}
