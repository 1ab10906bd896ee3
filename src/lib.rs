#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod converter;
pub mod diag;
pub mod errors;
pub mod math;
pub mod scene;

pub use converter::{Bone, Converter, ConverterContext, ConverterFile, ConverterNode, ConverterNodeHandle, Document};
pub use diag::{ConsoleLog, LogLevel, LogSink, MemoryLog};
pub use errors::{ConvertError, Result};
pub use scene::{SceneGraph, SceneNode, SceneNodeHandle, resolve_sid_path};
