//! Command handler modules for the Pineapple CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in as parameters

mod cfg;
mod deal;
mod eval;
mod replay;
mod rng;
mod score;
mod table;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use score::handle_score_command;
