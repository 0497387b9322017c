use placard::{Config, Placard};

#[allow(dead_code)]
pub fn sample_pairs() -> Vec<(String, String)> {
    vec![
        ("server_name".to_string(), "My Server".to_string()),
        (
            "welcome".to_string(),
            "Welcome to ${server_name}!".to_string(),
        ),
        ("empty".to_string(), String::new()),
    ]
}

#[allow(dead_code)]
pub fn create_engine() -> Placard {
    let engine = Placard::new();
    engine.load(sample_pairs());
    engine
}

#[allow(dead_code)]
pub fn create_engine_with_config(config: Config) -> Placard {
    let engine = Placard::with_config(config);
    engine.load(sample_pairs());
    engine
}

#[allow(dead_code)]
pub fn identity(value: &str) -> String {
    value.to_string()
}
