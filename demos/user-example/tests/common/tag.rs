use restdocs_core::ApiTag;

/// Documentation groups of the sample application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTag {
    User,
    Monitoring,
}

impl ApiTag for UserTag {
    fn name(&self) -> &str {
        match self {
            Self::User => "user api",
            Self::Monitoring => "monitoring",
        }
    }
}
