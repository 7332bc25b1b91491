/// Raw package as the sensor sends it: a kind code followed by positional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package<'a> {
    pub code: &'a str,
    pub data: &'a [f64],
}

impl<'a> Package<'a> {
    pub const fn new(code: &'a str, data: &'a [f64]) -> Self {
        Self { code, data }
    }
}

pub const SAMPLE_PACKAGES: [Package<'static>; 3] = [
    Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    Package::new("RUN", &[15000.0, 1.0, 75.0]),
    Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];
