use std::rc::Rc;
use yew::Reducible;

use crate::model::GameState;
use crate::util::clog;

/// The game as seen by the UI. `revision` advances on every user-driven
/// mutation so the persistence effect knows when to write; passive accrual
/// leaves it alone and is picked up by the periodic save instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub game: GameState,
    pub revision: u64,
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Click,
    Accrue { secs: f64 },
    Purchase { id: &'static str },
    Reset,
}

impl Reducible for Session {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Click => {
                new.game.click();
                new.revision += 1;
            }
            Accrue { secs } => {
                if new.game.generation_rate() <= 0.0 {
                    return self;
                }
                new.game.accrue(secs);
            }
            Purchase { id } => {
                if let Err(e) = new.game.purchase(id) {
                    clog(&format!("purchase rejected: {e}"));
                    return self;
                }
                new.revision += 1;
            }
            Reset => {
                // The blob is written by the revision effect.
                let _ = new.game.reset();
                new.revision += 1;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Rc<Session> {
        Rc::new(Session::default())
    }

    #[test]
    fn click_bumps_revision() {
        let s = session().reduce(GameAction::Click);
        assert_eq!(s.game.currency(), 1.0);
        assert_eq!(s.revision, 1);
    }

    #[test]
    fn accrue_without_rate_returns_same_rc() {
        let s = session();
        let after = s.clone().reduce(GameAction::Accrue { secs: 0.1 });
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn accrue_does_not_bump_revision() {
        let mut s = session();
        for _ in 0..15 {
            s = s.reduce(GameAction::Click);
        }
        s = s.reduce(GameAction::Purchase { id: "cursor" });
        let rev = s.revision;
        s = s.reduce(GameAction::Accrue { secs: 0.5 });
        assert_eq!(s.game.currency(), 0.5);
        assert_eq!(s.revision, rev);
    }

    #[test]
    fn failed_purchase_is_a_no_op() {
        let s = session().reduce(GameAction::Click);
        let after = s.clone().reduce(GameAction::Purchase { id: "cursor" });
        assert!(Rc::ptr_eq(&s, &after));
        let after = s.clone().reduce(GameAction::Purchase { id: "portal" });
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn reset_zeroes_and_bumps_revision() {
        let mut s = session();
        for _ in 0..20 {
            s = s.reduce(GameAction::Click);
        }
        s = s.reduce(GameAction::Purchase { id: "cursor" });
        let rev = s.revision;
        s = s.reduce(GameAction::Reset);
        assert_eq!(s.game, GameState::default());
        assert_eq!(s.revision, rev + 1);
    }

    #[test]
    fn purchase_sees_accrual_queued_before_it() {
        let mut s = session();
        for _ in 0..15 {
            s = s.reduce(GameAction::Click);
        }
        s = s.reduce(GameAction::Purchase { id: "cursor" });
        // 14 cookies, 3 short of the second cursor; the accrual lands before the buy.
        for _ in 0..14 {
            s = s.reduce(GameAction::Click);
        }
        let rendered = s.clone();
        s = s.reduce(GameAction::Accrue { secs: 3.0 });
        assert!(!rendered.game.can_afford("cursor"));
        let rev = s.revision;
        s = s.reduce(GameAction::Purchase { id: "cursor" });
        assert_eq!(s.revision, rev + 1);
        assert_eq!(s.game.cost("cursor"), Ok(19));
        assert_eq!(s.game.currency(), 0.0);
    }
}
