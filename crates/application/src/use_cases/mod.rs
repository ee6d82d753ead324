mod resolve_query;

pub use resolve_query::{
    Resolution, ResolutionContext, ResolveQueryUseCase, SPOOF_MX_PREFERENCE, SPOOF_TTL,
};
