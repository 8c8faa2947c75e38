use rand::distr::{Alphanumeric, SampleString};

/// Entity ids are `<prefix>-<16 alphanumeric chars>`, e.g. `thread-Xk29fjq81mNbTz4w`.
/// The columns storing them cap out at 24 characters, so the suffix length is
/// fixed at 16.
const SUFFIX_LEN: usize = 16;

pub const THREAD_PREFIX: &str = "thread";
pub const COMMENT_PREFIX: &str = "comment";
pub const REPLY_PREFIX: &str = "reply";
pub const USER_PREFIX: &str = "user";

/// Source of id suffixes. Injected into the repository so tests can pin ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self, prefix: &str) -> String;
}

/// Default generator backed by the thread-local RNG.
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let suffix = Alphanumeric.sample_string(&mut rand::rng(), SUFFIX_LEN);
        format!("{prefix}-{suffix}")
    }
}
