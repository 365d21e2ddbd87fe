// Persistence layer: the file-based hand-off contract between stages.
//
// `paths` names every artifact; `codec` reads and writes them. Each stage
// owns its outputs and only reads what an earlier stage wrote.

pub mod codec;
pub mod paths;
