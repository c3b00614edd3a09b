use embassy_stm32::gpio::{Level, Output};
use looper::ProgressDisplay;

pub struct LedBar<'a> {
    leds: [Output<'a>; 8],
}

impl<'a> LedBar<'a> {
    pub fn new(leds: [Output<'a>; 8]) -> LedBar<'a> {
        LedBar { leds }
    }
}

impl ProgressDisplay for LedBar<'_> {
    fn show(&mut self, mask: u8) {
        for (bit, led) in self.leds.iter_mut().enumerate() {
            led.set_level(Level::from(mask & (1 << bit) != 0));
        }
    }
}
