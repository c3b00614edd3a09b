use embassy_stm32::gpio::Input;
use looper::{ButtonInput, ButtonMask};

/// The six looper buttons, wired active-low with pull-ups.
/// Input `n` drives bit `n` of the sampled mask.
pub struct ButtonBank<'a> {
    inputs: [Input<'a>; 6],
}

impl<'a> ButtonBank<'a> {
    pub fn new(inputs: [Input<'a>; 6]) -> ButtonBank<'a> {
        ButtonBank { inputs }
    }
}

impl ButtonInput for ButtonBank<'_> {
    fn sample(&mut self) -> ButtonMask {
        let bits = self
            .inputs
            .iter()
            .enumerate()
            .filter(|(_, input)| input.is_low())
            .fold(0u8, |bits, (bit, _)| bits | (1 << bit));

        ButtonMask::from_bits(bits)
    }
}
