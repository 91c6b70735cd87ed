use prefur::core::thermo::DEFAULT_TEMPERATURE;

pub struct DefaultsConfig {
    pub temperature: f64,
    pub precision: usize,
    pub show_barriers: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            precision: 4,
            show_barriers: false,
        }
    }
}
