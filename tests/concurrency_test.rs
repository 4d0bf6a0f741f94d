use std::sync::Arc;
use std::thread;

use relgen::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_shared_types_are_thread_safe() {
    assert_send_sync::<StatementGenerator>();
    assert_send_sync::<Statement>();
    assert_send_sync::<DdlStatement>();
}

#[test]
fn test_concurrent_exports_share_one_generator() {
    let generator = Arc::new(StatementGenerator::new(Dialect::Postgres));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let citizen = FromTable::new("citizen").with_alias("c");
                let statement: Statement = SqlSelect::builder()
                    .from(citizen.clone())
                    .with_value(table_col(&citizen, "id"))
                    .with_condition(eq(table_col(&citizen, "age"), i as i64))
                    .build()
                    .unwrap()
                    .into();
                (0..50)
                    .map(|_| generator.export(&statement).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outputs = handle.join().unwrap();
        let expected = format!("select c.id from citizen AS c where c.age = {}", i);
        assert!(outputs.iter().all(|sql| *sql == expected));
    }
}
