use defmt::info;
use embassy_stm32::gpio::{Input, Level, Output, OutputType, Pull, Speed};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};

pub mod buttons;
#[cfg(feature = "store-flash")]
pub mod flash_store;
pub mod leds;
pub mod speaker;

use buttons::ButtonBank;
use leds::LedBar;
use speaker::PwmTone;

pub struct Hardware<'a> {
    pub buttons: ButtonBank<'a>,
    pub leds: LedBar<'a>,
    pub tone: PwmTone<'a>,
    #[cfg(feature = "store-flash")]
    pub flash: embassy_stm32::flash::Flash<'a, embassy_stm32::flash::Blocking>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");
        let peripherals = embassy_stm32::init(Default::default());

        // Mask bit order: drum3, drum2, drum1, play, record, new note
        let buttons = ButtonBank::new([
            Input::new(peripherals.PD0, Pull::Up),
            Input::new(peripherals.PD1, Pull::Up),
            Input::new(peripherals.PD2, Pull::Up),
            Input::new(peripherals.PD3, Pull::Up),
            Input::new(peripherals.PD4, Pull::Up),
            Input::new(peripherals.PD5, Pull::Up),
        ]);

        let leds = LedBar::new([
            Output::new(peripherals.PG0, Level::Low, Speed::Low),
            Output::new(peripherals.PG1, Level::Low, Speed::Low),
            Output::new(peripherals.PG2, Level::Low, Speed::Low),
            Output::new(peripherals.PG3, Level::Low, Speed::Low),
            Output::new(peripherals.PG4, Level::Low, Speed::Low),
            Output::new(peripherals.PG5, Level::Low, Speed::Low),
            Output::new(peripherals.PG6, Level::Low, Speed::Low),
            Output::new(peripherals.PG7, Level::Low, Speed::Low),
        ]);

        let speaker_pin = PwmPin::new(peripherals.PA6, OutputType::PushPull);
        let pwm = SimplePwm::new(
            peripherals.TIM3,
            Some(speaker_pin),
            None,
            None,
            None,
            Hertz(440),
            CountingMode::EdgeAlignedUp,
        );
        let tone = PwmTone::new(pwm);

        #[cfg(feature = "store-flash")]
        let flash = embassy_stm32::flash::Flash::new_blocking(peripherals.FLASH);

        Hardware {
            buttons,
            leds,
            tone,
            #[cfg(feature = "store-flash")]
            flash,
        }
    }
}
