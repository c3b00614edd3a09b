use defmt::trace;

use crate::io::AudioOutput;

/// Tone generator hardware, e.g. a PWM channel toggling a speaker pin.
pub trait ToneDriver {
    /// Lowest frequency the generator can represent, in Hz.
    const MIN_FREQUENCY: f32;
    /// Highest frequency the generator can represent, in Hz.
    const MAX_FREQUENCY: f32;

    /// Reprograms and starts the generator. `hz` is within range.
    fn set_tone(&mut self, hz: f32);

    fn silence(&mut self);
}

/// [`AudioOutput`] over a [`ToneDriver`].
///
/// Only a change of the requested frequency reaches the driver, so a tone
/// requested every tick keeps playing without its phase being reset.
/// Requests outside the generator range are clamped to it.
pub struct Speaker<T: ToneDriver> {
    driver: T,
    current_frequency: f32,
}

impl<T: ToneDriver> Speaker<T> {
    /// The driver must start silent.
    pub fn new(driver: T) -> Self {
        Self {
            driver,
            current_frequency: 0.0,
        }
    }

    pub fn current_frequency(&self) -> f32 {
        self.current_frequency
    }

    pub fn driver(&self) -> &T {
        &self.driver
    }
}

impl<T: ToneDriver> AudioOutput for Speaker<T> {
    fn set_frequency(&mut self, hz: f32) {
        if hz == self.current_frequency {
            return;
        }

        if hz <= 0.0 {
            trace!("Speaker: silence");
            self.driver.silence();
        } else {
            let clamped = hz.clamp(T::MIN_FREQUENCY, T::MAX_FREQUENCY);
            trace!("Speaker: {} Hz", clamped);
            self.driver.set_tone(clamped);
        }

        self.current_frequency = hz;
    }
}
