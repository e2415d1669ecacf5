// Fixed-cadence driver for the accrual timer. Pure so it can be tested without a window.
use crate::config::{SAVE_EVERY_TICKS, TICK_SECS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub accrue_secs: f64,
    pub save: bool,
}

#[derive(Clone, Debug)]
pub struct TickDriver {
    pub tick_secs: f64,
    pub save_every: u32,
    fired: u32,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(TICK_SECS, SAVE_EVERY_TICKS)
    }
}

impl TickDriver {
    pub fn new(tick_secs: f64, save_every: u32) -> Self {
        Self {
            tick_secs,
            save_every: save_every.max(1),
            fired: 0,
        }
    }

    /// Called once per timer fire.
    pub fn fire(&mut self) -> Tick {
        self.fired += 1;
        let save = self.fired >= self.save_every;
        if save {
            self.fired = 0;
        }
        Tick {
            accrue_secs: self.tick_secs,
            save,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_on_every_fiftieth_tick() {
        let mut driver = TickDriver::default();
        let saves: Vec<usize> = (1..=150)
            .filter(|_| driver.fire().save)
            .collect();
        assert_eq!(saves, vec![50, 100, 150]);
    }

    #[test]
    fn each_tick_advances_a_tenth_of_a_second() {
        let mut driver = TickDriver::default();
        assert_eq!(driver.fire().accrue_secs, 0.1);
    }

    #[test]
    fn zero_ratio_saves_every_tick() {
        let mut driver = TickDriver::new(0.25, 0);
        assert!(driver.fire().save);
        assert!(driver.fire().save);
    }

    #[test]
    fn ten_ticks_match_one_second_of_accrual() {
        use crate::model::GameState;
        let mut driver = TickDriver::default();
        let mut ticked = GameState::default();
        for _ in 0..15 {
            ticked.click();
        }
        ticked.purchase("cursor").unwrap();
        let mut once = ticked.clone();
        for _ in 0..10 {
            ticked.accrue(driver.fire().accrue_secs);
        }
        once.accrue(1.0);
        assert!((ticked.currency() - once.currency()).abs() < 1e-9);
    }
}
