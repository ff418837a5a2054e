use derive_more::Display;
use serde::{Serialize, Serializer};

use crate::types::{LandingGear, Sensors, Weather};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Callout {
    #[display(fmt = "PULL UP")]
    PullUp,
    #[display(fmt = "WINDSHEAR")]
    Windshear,
    #[display(fmt = "{}", _0)]
    Altitude(u16),
    #[display(fmt = "RETARD")]
    Retard,
}

impl Serialize for Callout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Window {
    altitude: u16,
    text: &'static str,
    floor: f32,
    duration: f32,
}

const fn window(altitude: u16, text: &'static str, floor: f32, duration: f32) -> Window {
    Window { altitude, text, floor, duration }
}

// Each callout fires once while passing between its altitude and floor
const WINDOWS: [Window; 12] = [
    window(2500, "2500", 2400.0, 1.5),
    window(1000, "1000", 950.0, 1.5),
    window(500, "500", 480.0, 1.0),
    window(400, "400", 380.0, 1.0),
    window(300, "300", 280.0, 1.0),
    window(200, "200", 180.0, 1.0),
    window(100, "100", 90.0, 1.0),
    window(50, "50", 45.0, 0.8),
    window(40, "40", 35.0, 0.8),
    window(30, "30", 25.0, 0.8),
    window(20, "20", 15.0, 0.8),
    window(10, "10", 5.0, 0.8),
];

const RETARD_ARM_ALTITUDE: u16 = 20;
const REARM_ALTITUDE: f32 = 3000.0;
const PULL_UP_ALTITUDE: f32 = 2500.0;
const PULL_UP_SINK_RATE: f32 = -1500.0;
const WINDSHEAR_ALTITUDE: f32 = 1500.0;
const WINDSHEAR_THRESHOLD: f32 = 0.3;
const APPROACH_SINK_RATE: f32 = -300.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Gpws {
    pub current: Option<Callout>,
    pub timer: f32,
    pub pull_up_active: bool,
    pub windshear_active: bool,
    pub retard_active: bool,
    pub called: [bool; 12],
}

impl Gpws {
    pub fn callout(&self) -> &'static str {
        match self.current {
            Some(Callout::PullUp) => "PULL UP",
            Some(Callout::Windshear) => "WINDSHEAR",
            Some(Callout::Retard) => "RETARD",
            Some(Callout::Altitude(altitude)) => {
                WINDOWS.iter().find(|w| w.altitude == altitude).map_or("", |w| w.text)
            }
            None => "",
        }
    }

    fn announce(&mut self, callout: Callout, duration: f32) {
        if self.current != Some(callout) {
            debug!("GPWS {}", callout);
        }
        self.current = Some(callout);
        self.timer = duration;
    }

    pub fn update(&mut self, sensors: &Sensors, gear: &LandingGear, weather: &Weather, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }
        if self.timer <= 0.0 {
            self.current = None;
        }

        let altitude = sensors.altitude_ft;
        let airborne = !gear.weight_on_wheels;
        self.pull_up_active =
            altitude < PULL_UP_ALTITUDE && sensors.vs_fpm < PULL_UP_SINK_RATE && airborne;
        self.windshear_active =
            weather.windshear_intensity > WINDSHEAR_THRESHOLD && altitude < WINDSHEAR_ALTITUDE;

        if self.pull_up_active {
            self.announce(Callout::PullUp, 1.0);
        } else if self.windshear_active {
            self.announce(Callout::Windshear, 2.0);
        }

        if altitude > REARM_ALTITUDE && sensors.vs_fpm > 0.0 {
            self.called = [false; 12];
            self.retard_active = false;
        }

        let approaching = sensors.vs_fpm < APPROACH_SINK_RATE && airborne;
        if approaching && !self.pull_up_active && !self.windshear_active {
            let called = self.called;
            let next = WINDOWS.iter().enumerate().find(|(i, w)| {
                !called[*i] && altitude <= w.altitude as f32 && altitude > w.floor
            });
            if let Some((index, window)) = next {
                self.called[index] = true;
                self.announce(Callout::Altitude(window.altitude), window.duration);
                if window.altitude == RETARD_ARM_ALTITUDE {
                    self.retard_active = true;
                }
            }
        }

        let flaring = altitude < 20.0 && altitude > 5.0 && airborne;
        if self.retard_active && flaring && self.current != Some(Callout::Retard) {
            self.announce(Callout::Retard, 3.0);
        }
    }
}
