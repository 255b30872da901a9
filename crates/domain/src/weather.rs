//! Weather monitor — broadcasts temperature readings to registered displays.

use serde::{Deserialize, Serialize};

use crate::id::SubscriberId;
use crate::observer::{Observer, Subscribers};

/// The kinds of display that can follow a [`WeatherMonitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    Mobile,
    Television,
}

impl DisplayKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Television => "Television",
        }
    }
}

/// A display showing the most recent temperature it was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDisplay {
    kind: DisplayKind,
    shown: Option<f64>,
}

impl WeatherDisplay {
    #[must_use]
    pub fn new(kind: DisplayKind) -> Self {
        Self { kind, shown: None }
    }

    #[must_use]
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    /// Last temperature shown, if any reading arrived yet.
    #[must_use]
    pub fn shown(&self) -> Option<f64> {
        self.shown
    }
}

impl Observer for WeatherDisplay {
    type Value = f64;
    type Notice = DisplayReading;

    fn update(&mut self, temperature: &f64) -> DisplayReading {
        self.shown = Some(*temperature);
        DisplayReading {
            display: self.kind,
            temperature: *temperature,
        }
    }
}

/// A display reporting the value it now shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayReading {
    pub display: DisplayKind,
    pub temperature: f64,
}

impl std::fmt::Display for DisplayReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} display shows temperature: {}°C",
            self.display.label(),
            self.temperature
        )
    }
}

/// Holds the current temperature and the displays following it.
#[derive(Debug, Clone, Default)]
pub struct WeatherMonitor {
    temperature: f64,
    displays: Subscribers<WeatherDisplay>,
}

impl WeatherMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, display: WeatherDisplay) -> SubscriberId {
        self.displays.register(display)
    }

    pub fn unregister(&mut self, id: SubscriberId) -> Option<WeatherDisplay> {
        self.displays.unregister(id)
    }

    /// Store a new reading and push it to every display, in registration order.
    pub fn set_temperature(&mut self, temperature: f64) -> Vec<DisplayReading> {
        self.temperature = temperature;
        self.displays.notify(&self.temperature)
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn display_count(&self) -> usize {
        self.displays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_push_reading_to_displays_in_order() {
        let mut monitor = WeatherMonitor::new();
        monitor.register(WeatherDisplay::new(DisplayKind::Mobile));
        monitor.register(WeatherDisplay::new(DisplayKind::Television));

        let readings = monitor.set_temperature(25.5);
        let kinds: Vec<_> = readings.iter().map(|r| r.display).collect();
        assert_eq!(kinds, vec![DisplayKind::Mobile, DisplayKind::Television]);
        assert!(readings.iter().all(|r| (r.temperature - 25.5).abs() < f64::EPSILON));
    }

    #[test]
    fn should_overwrite_previous_reading() {
        let mut monitor = WeatherMonitor::new();
        monitor.set_temperature(10.0);
        monitor.set_temperature(-3.5);
        assert!((monitor.temperature() + 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_duplicate_display_kinds() {
        let mut monitor = WeatherMonitor::new();
        monitor.register(WeatherDisplay::new(DisplayKind::Mobile));
        monitor.register(WeatherDisplay::new(DisplayKind::Mobile));
        assert_eq!(monitor.set_temperature(1.0).len(), 2);
    }

    #[test]
    fn should_not_notify_unregistered_display() {
        let mut monitor = WeatherMonitor::new();
        let mobile = monitor.register(WeatherDisplay::new(DisplayKind::Mobile));
        monitor.register(WeatherDisplay::new(DisplayKind::Television));

        let removed = monitor.unregister(mobile).unwrap();
        assert_eq!(removed.kind(), DisplayKind::Mobile);

        let readings = monitor.set_temperature(20.0);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].display, DisplayKind::Television);
        assert_eq!(removed.shown(), None);
    }

    #[test]
    fn should_notify_nobody_without_displays() {
        let mut monitor = WeatherMonitor::new();
        assert!(monitor.set_temperature(12.0).is_empty());
    }

    #[test]
    fn should_describe_reading() {
        let reading = DisplayReading {
            display: DisplayKind::Television,
            temperature: 25.5,
        };
        assert_eq!(
            reading.to_string(),
            "Television display shows temperature: 25.5°C"
        );
    }
}
