//! Entity model checked at admission time: identifiers, secrets,
//! environments, commands, volumes, containers and resources.

pub mod bytes;
pub mod command;
pub mod container;
pub mod environment;
pub mod id;
pub mod os;
pub mod resources;
pub mod secret;
pub mod task;
pub mod volume;

pub use command::{CommandInfo, CommandUri};
pub use container::{ContainerInfo, ContainerType};
pub use environment::{Environment, Variable, VariableType};
pub use id::{AgentId, ExecutorId, FrameworkId, TaskId};
pub use resources::{Resource, ResourceList, Scalar, ScalarError, ValueType};
pub use secret::{Reference, Secret, SecretType, SecretValue};
pub use task::TaskSubmission;
pub use volume::{
    AppcImage, DockerImage, DockerVolume, Image, ImageType, Mode, SandboxPath, SandboxPathType,
    SourceHostPath, SourceType, Volume, VolumeSource,
};
