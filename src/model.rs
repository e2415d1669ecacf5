//! Core economy for the cookie clicker.
//! Owns the currency counter and per-upgrade counts, prices the next unit of
//! each upgrade, and validates purchases. No DOM or timer dependency.

use crate::config::COST_GROWTH;
use crate::error::EconomyError;

/// A purchasable building. Static for the lifetime of the app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    /// Price of the first unit.
    pub base_cost: f64,
    /// Cookies per second produced by one unit.
    pub rate: f64,
}

pub const UPGRADE_DEFS: &[UpgradeDef] = &[
    UpgradeDef {
        id: "cursor",
        name: "Cursor",
        desc: "+1 cookie / second",
        base_cost: 15.0,
        rate: 1.0,
    },
    UpgradeDef {
        id: "grandma",
        name: "Grandma",
        desc: "+5 cookies / second",
        base_cost: 100.0,
        rate: 5.0,
    },
    UpgradeDef {
        id: "farm",
        name: "Farm",
        desc: "+20 cookies / second",
        base_cost: 500.0,
        rate: 20.0,
    },
    UpgradeDef {
        id: "factory",
        name: "Factory",
        desc: "+75 cookies / second",
        base_cost: 2000.0,
        rate: 75.0,
    },
];

/// Price of the next unit when `owned` units are already held.
pub fn cost_for(def: &UpgradeDef, owned: u32) -> u64 {
    (def.base_cost * COST_GROWTH.powf(owned as f64)).floor() as u64
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    defs: &'static [UpgradeDef],
    /// Never negative. Fractional between accrual ticks.
    currency: f64,
    /// Parallel to `defs`, one count per upgrade.
    owned: Vec<u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(UPGRADE_DEFS)
    }
}

impl GameState {
    /// Fresh zeroed state over the given catalog.
    pub fn new(defs: &'static [UpgradeDef]) -> Self {
        Self {
            defs,
            currency: 0.0,
            owned: vec![0; defs.len()],
        }
    }

    /// Builds a state from already validated parts. Missing counts are zero.
    pub(crate) fn from_parts(defs: &'static [UpgradeDef], currency: f64, owned: Vec<u32>) -> Self {
        let mut state = Self::new(defs);
        state.currency = if currency.is_finite() { currency.max(0.0) } else { 0.0 };
        for (slot, n) in state.owned.iter_mut().zip(owned) {
            *slot = n;
        }
        state
    }

    pub fn currency(&self) -> f64 {
        self.currency
    }

    fn index_of(&self, id: &str) -> Result<usize, EconomyError> {
        self.defs
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| EconomyError::UnknownUpgrade(id.to_string()))
    }

    #[cfg(test)]
    pub fn owned(&self, id: &str) -> Result<u32, EconomyError> {
        Ok(self.owned[self.index_of(id)?])
    }

    /// `(definition, owned count)` in catalog order, for rendering and saving.
    pub fn entries(&self) -> impl Iterator<Item = (&'static UpgradeDef, u32)> + '_ {
        self.defs.iter().zip(self.owned.iter().copied())
    }

    /// Total cookies per second across all owned upgrades.
    pub fn generation_rate(&self) -> f64 {
        self.entries().map(|(def, n)| n as f64 * def.rate).sum()
    }

    pub fn cost(&self, id: &str) -> Result<u64, EconomyError> {
        let idx = self.index_of(id)?;
        Ok(cost_for(&self.defs[idx], self.owned[idx]))
    }

    /// False for unknown ids as well as unaffordable ones.
    pub fn can_afford(&self, id: &str) -> bool {
        self.cost(id).is_ok_and(|c| self.currency >= c as f64)
    }

    /// Manual click on the cookie.
    pub fn click(&mut self) {
        self.currency += 1.0;
    }

    /// Adds `rate * secs` to the currency. Linear in `secs`.
    pub fn accrue(&mut self, secs: f64) {
        if !secs.is_finite() || secs <= 0.0 {
            return;
        }
        let rate = self.generation_rate();
        if rate <= 0.0 {
            return;
        }
        self.currency += rate * secs;
    }

    /// Buys one unit of `id`, returning the price paid.
    pub fn purchase(&mut self, id: &str) -> Result<u64, EconomyError> {
        let idx = self.index_of(id)?;
        let cost = cost_for(&self.defs[idx], self.owned[idx]);
        if self.currency < cost as f64 {
            return Err(EconomyError::InsufficientFunds {
                cost,
                available: self.currency,
            });
        }
        self.currency = (self.currency - cost as f64).max(0.0);
        self.owned[idx] = self.owned[idx].saturating_add(1);
        Ok(cost)
    }

    /// Wipes progress back to a zeroed state over the same catalog.
    /// Returns the blob that must be persisted right away.
    pub fn reset(&mut self) -> crate::save::SaveBlob {
        *self = Self::new(self.defs);
        self.serialize()
    }

    #[cfg(test)]
    pub(crate) fn set_currency(&mut self, amount: f64) {
        self.currency = amount;
    }
}
