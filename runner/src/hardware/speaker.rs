use embassy_stm32::peripherals::TIM3;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;
use looper::ToneDriver;

/// Square wave on TIM3 channel 1, driving the speaker.
pub struct PwmTone<'d> {
    pwm: SimplePwm<'d, TIM3>,
}

impl<'d> PwmTone<'d> {
    pub fn new(mut pwm: SimplePwm<'d, TIM3>) -> PwmTone<'d> {
        pwm.ch1().disable();
        PwmTone { pwm }
    }
}

impl ToneDriver for PwmTone<'_> {
    const MIN_FREQUENCY: f32 = 1.0;
    const MAX_FREQUENCY: f32 = 20_000.0;

    fn set_tone(&mut self, hz: f32) {
        self.pwm.set_frequency(Hertz((hz + 0.5) as u32));

        // The duty cycle is relative to the old period until rewritten
        let mut channel = self.pwm.ch1();
        channel.set_duty_cycle_fraction(1, 2);
        channel.enable();
    }

    fn silence(&mut self) {
        self.pwm.ch1().disable();
    }
}
