//! Play effects.
//!
//! Every card play ends up in `Game::resolve`, which moves the card onto
//! the pile, updates the active constraint and applies the variant's
//! effect:
//!
//! - `resolver`: per-variant dispatch
//! - `sequence`: the multi-step effects (TAKI placement and the +3 breaker
//!   offer), which issue further decision requests
//!
//! Effects trust the caller to have checked `Card::can_play`. The only
//! card resolved without an acting player is the setup starter, which
//! always has both a color and a sign.

mod resolver;
mod sequence;
