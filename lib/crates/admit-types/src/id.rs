//! Identifier wrappers.
//!
//! Each ID is a `{ "value": "..." }` message on the wire. They share one
//! rule set but stay distinct types so callers cannot mix them up.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            pub value: String,
        }

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self { value: value.into() }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

id_type!(
    /// Identifies a task within a framework.
    TaskId
);
id_type!(
    /// Identifies an executor within a framework.
    ExecutorId
);
id_type!(
    /// Identifies a framework registered with the control plane.
    FrameworkId
);
id_type!(
    /// Identifies an agent node offering resources.
    AgentId
);
