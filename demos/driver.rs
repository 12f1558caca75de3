//! Walks a list of names through every operation and prints each step.
//!
//! The list's own logging of growth, clears and splits is shown at `trace` level
//! unless `RUST_LOG` says otherwise, e.g. `RUST_LOG=warn cargo run --example driver`.

use dynamic_list::{DynamicList, ListError, DEFAULT_CAPACITY};

fn main() -> Result<(), ListError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let mut list = DynamicList::new();
    for name in ["Tom", "Sam", "Jack", "Anna", "Kate"] {
        list.push(name.to_string());
    }
    println!("{}", list);
    println!("{}", list.len());

    list.insert(2, "Sally".to_string())?;
    println!("{}", list);

    list.quick_sort(Ord::cmp);
    println!("{}", list);

    println!("{}", list.get(4)?);
    list.set(4, "Luce".to_string())?;
    println!("{}", list);
    println!("{}", list.is_sorted());

    list.quick_sort(Ord::cmp);
    println!("{}", list.is_sorted());

    list.split(3)?;
    println!("{}", list);

    list.remove(1)?;
    println!("{}", list);

    list.clear();
    println!("{}", list);

    if let Err(err) = list.get(0) {
        log::warn!("reading a cleared list fails: {}", err);
    }

    // one past the default capacity, so the buffer has to grow
    for i in 0..=DEFAULT_CAPACITY {
        list.push(format!("Guest{}", i));
    }
    println!("{}", list);
    println!("{} {}", list.len(), list.capacity());

    Ok(())
}
