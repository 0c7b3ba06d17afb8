//! Bounded-run string repair as a layered DP.
//!
//! Layer `i` decides position `i`. A slot encodes the trailing run that ends
//! at position `i - 1`: its symbol and its length. Run length 0 only occurs
//! on layer 0 and means "no prior run". A transition that would extend a run
//! to length `k` is forbidden, so every reachable slot has length `< k`.
//!
//! Tie-breaking is fixed so that witnesses are reproducible:
//! - predecessors are scanned in ascending slot order (symbol 0 before 1,
//!   shorter runs before longer), candidate symbols 0 before 1, and a slot is
//!   only overwritten by a strictly cheaper path;
//! - the terminal slot is the cheapest one with the lowest symbol, then the
//!   lowest run length.

use crate::instance::{Bit, Instance};
use crate::traits::{BackLayer, BackPointer, Frontier, LayeredProblem};

/// Trailing run: the last symbol written and how many times in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunState {
    pub symbol: Bit,
    pub length: usize,
}

impl RunState {
    /// State before any symbol has been written.
    pub const START: RunState = RunState {
        symbol: Bit::Zero,
        length: 0,
    };

    /// Append `c`; `None` if that creates a run of `k` or more.
    #[inline]
    pub fn push(self, c: Bit, k: usize) -> Option<RunState> {
        let length = if self.length > 0 && c == self.symbol {
            self.length + 1
        } else {
            1
        };
        (length < k).then_some(RunState { symbol: c, length })
    }
}

/// DP instance over a borrowed [`Instance`].
#[derive(Clone, Copy, Debug)]
pub struct RunBoundProblem<'a> {
    instance: &'a Instance,
    /// Slots per symbol: run lengths `0..span`.
    span: usize,
}

impl<'a> RunBoundProblem<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        // Runs never exceed n, so for k > n the table stops at n.
        let span = instance.k().min(instance.len() + 1);
        Self { instance, span }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    #[inline]
    pub fn slot(&self, state: RunState) -> usize {
        state.symbol.index() * self.span + state.length
    }

    #[inline]
    pub fn state(&self, slot: usize) -> RunState {
        let symbol = if slot < self.span { Bit::Zero } else { Bit::One };
        RunState {
            symbol,
            length: slot % self.span,
        }
    }
}

impl LayeredProblem for RunBoundProblem<'_> {
    type Label = Bit;

    fn num_layers(&self) -> usize {
        self.instance.len()
    }

    fn width(&self) -> usize {
        2 * self.span
    }

    fn init_frontier(&self) -> Frontier {
        let mut f = vec![None; self.width()];
        for symbol in Bit::ALL {
            f[self.slot(RunState { symbol, length: 0 })] = Some(0);
        }
        f
    }

    fn forward_step(&self, layer: usize, frontier: &Frontier) -> (Frontier, BackLayer<Bit>) {
        let width = self.width();
        let k = self.instance.k();
        let cell = self.instance.pattern()[layer];
        let mut next: Frontier = vec![None; width];
        let mut back: BackLayer<Bit> = vec![None; width];

        for (prev, cost) in frontier.iter().enumerate() {
            let Some(cost) = *cost else { continue };
            let from = self.state(prev);
            for &c in cell.candidates() {
                let Some(to) = from.push(c, k) else { continue };
                let slot = self.slot(to);
                let cand = cost + self.instance.deviation(layer, c);
                if next[slot].map_or(true, |best| cand < best) {
                    next[slot] = Some(cand);
                    back[slot] = Some(BackPointer { prev, label: c });
                }
            }
        }

        (next, back)
    }

    fn terminal_slot(&self, frontier_t: &Frontier) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (slot, cost) in frontier_t.iter().enumerate() {
            if let Some(cost) = *cost {
                if best.map_or(true, |(_, b)| cost < b) {
                    best = Some((slot, cost));
                }
            }
        }
        best.map(|(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DpEngine;

    #[test]
    fn push_extends_and_resets_runs() {
        let s = RunState::START.push(Bit::One, 3).unwrap();
        assert_eq!(s, RunState { symbol: Bit::One, length: 1 });
        let s = s.push(Bit::One, 3).unwrap();
        assert_eq!(s.length, 2);
        assert_eq!(s.push(Bit::One, 3), None);
        assert_eq!(
            s.push(Bit::Zero, 3),
            Some(RunState { symbol: Bit::Zero, length: 1 })
        );
    }

    #[test]
    fn start_state_does_not_extend_a_zero_run() {
        // The sentinel carries symbol 0 but no length; writing 0 starts at 1.
        assert_eq!(
            RunState::START.push(Bit::Zero, 2),
            Some(RunState { symbol: Bit::Zero, length: 1 })
        );
    }

    #[test]
    fn k_one_forbids_every_symbol() {
        assert_eq!(RunState::START.push(Bit::Zero, 1), None);
        assert_eq!(RunState::START.push(Bit::One, 1), None);
    }

    #[test]
    fn slot_layout_round_trips() {
        let inst = Instance::parse(6, 4, "??????", "000000").unwrap();
        let p = RunBoundProblem::new(&inst);
        assert_eq!(p.width(), 8);
        for slot in 0..p.width() {
            assert_eq!(p.slot(p.state(slot)), slot);
        }
    }

    #[test]
    fn span_is_capped_by_length() {
        let inst = Instance::parse(3, 1000, "???", "000").unwrap();
        assert_eq!(RunBoundProblem::new(&inst).width(), 8);
    }

    #[test]
    fn terminal_prefers_lower_symbol_then_shorter_run() {
        let inst = Instance::parse(2, 3, "??", "00").unwrap();
        let p = RunBoundProblem::new(&inst);
        // slots: (0,0) (0,1) (0,2) (1,0) (1,1) (1,2)
        let f = vec![None, Some(4), Some(2), None, Some(2), Some(1)];
        assert_eq!(p.terminal_slot(&f), Some(5));
        let f = vec![None, Some(2), Some(2), None, Some(2), None];
        assert_eq!(p.terminal_slot(&f), Some(1));
        assert_eq!(p.terminal_slot(&vec![None; 6]), None);
    }

    #[test]
    fn all_zero_reference_alternates_under_k2() {
        let inst = Instance::parse(4, 2, "????", "0000").unwrap();
        let path = DpEngine::new(RunBoundProblem::new(&inst)).run().unwrap();
        assert_eq!(path.cost, 2);
        // 0101 and 1010 tie; the terminal rule prefers ending on symbol 0.
        assert_eq!(path.labels, vec![Bit::One, Bit::Zero, Bit::One, Bit::Zero]);
    }

    #[test]
    fn fixed_run_of_length_k_is_infeasible() {
        let inst = Instance::parse(4, 3, "?111", "0000").unwrap();
        assert!(DpEngine::new(RunBoundProblem::new(&inst)).run().is_none());
    }
}
