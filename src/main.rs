//! A short, linear walkthrough of the library: buffers and cursors, scans and
//! reductions, a lookup whose failure is caught and reported, and an observable
//! teardown order. Runs with no arguments and exits 0.

use seq_basics::collections::contiguous::DynArray;
use seq_basics::collections::linear::LinearMap;
use seq_basics::lifecycle::{AuditedStore, Store, TeardownLog};
use seq_basics::numeric::{inclusive_scan, inner_product, iota, reduce};

fn main() {
    println!("\n[DynArray]\n");

    // A buffer counting 1..=10, and a buffer of ones whose running sum
    // should count the same way.
    let counted = iota(1_u32, 1, 10);
    let ones = DynArray::repeat_item(1_u32, 10);
    let running = inclusive_scan(&ones, |a, b| a + b);

    if counted == running {
        println!("the buffers are equal");
    } else {
        println!("the buffers are not equal");
    }

    for (a, b) in counted.iter().zip(running.iter()) {
        println!("{a} {b}");
    }

    println!("\n[Cursor]\n");

    let mut cur = counted.cursor();
    cur += 3;
    println!("slot {} holds {:?}", cur.pos(), cur.get());
    println!("offset read at -2: {:?}", cur.peek(-2));
    println!("distance to end: {}", counted.cursor_end() - cur);
    println!("seek past the end: {:?}", cur.try_seek(100));

    println!("\n[Reductions]\n");

    let total = reduce(counted.iter().copied(), 0, |acc, v| acc + v);
    println!("sum of 1..=10: {total}");

    let dot = inner_product(
        counted.iter(),
        ones.iter(),
        0,
        |acc, v| acc + v,
        |a, b| a * b,
    );
    println!("inner product with ones: {dot}");
    println!("final running sum: {}", running[running.size() - 1]);

    println!("\n[LinearMap]\n");

    let palette = LinearMap::from([("red", 1), ("blue", 2), ("green", 3)]);
    for key in ["blue", "purple"] {
        // A miss is recoverable: report it and carry on.
        match palette.get(&key) {
            Ok(value) => println!("{key}: {value}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    println!("\n[Teardown]\n");

    let log = TeardownLog::new();
    {
        let mut store = Store::Audited(AuditedStore::new("F_BODY", 100, log.clone()));
        if let Store::Audited(audited) = &mut store {
            audited.write(42, 7).expect("index 42 is in bounds");
            println!("{}", audited.describe());
        }
    }
    println!("teardown order: {:?}", log.stages());
}
