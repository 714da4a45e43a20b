//! Example demonstrating binding through `dyn Any`

use std::any::Any;
use std::collections::HashMap;

use envbind::{EnvBind, Registry};

#[derive(Debug, Default, EnvBind)]
struct Worker {
    #[env(name = "threads", default = "4")]
    pub threads: usize,
}

#[derive(Debug, Default, EnvBind)]
struct Cache {
    #[env(name = "capacity", default = "1024")]
    pub capacity: u64,
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.register::<Worker>().register::<Cache>();

    let env: HashMap<String, String> = [("threads".to_string(), "8".to_string())].into();

    let mut targets: Vec<Box<dyn Any>> = vec![
        Box::new(Worker::default()),
        Box::new(Cache::default()),
        Box::new(String::from("not a record")),
    ];

    for target in &mut targets {
        match registry.bind(Some(&mut **target), &env) {
            Ok(()) => println!("bound: {}", describe(&**target)),
            Err(err) => println!("skipped: {err}"),
        }
    }

    Ok(())
}

fn describe(target: &dyn Any) -> String {
    if let Some(worker) = target.downcast_ref::<Worker>() {
        format!("{worker:?}")
    } else if let Some(cache) = target.downcast_ref::<Cache>() {
        format!("{cache:?}")
    } else {
        "unknown".to_string()
    }
}
