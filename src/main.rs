//! slotmark: 无头回放宿主
//!
//! 从 JSON lines 脚本（文件或 stdin）读取宿主事件，驱动一个 Workbench，
//! 最后把当前容器的标注打印到 stdout。
//!
//! ```text
//! slotmark <world-dir | sp:<存档名> | mp:<服务器地址>> [script.jsonl]
//! ```
//!
//! `sp:`/`mp:` 形式把数据放在应用数据目录下的 worlds/<世界目录> 中。

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use compact_str::CompactString;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use slotmark::app::{OpenContainer, Workbench};
use slotmark::core::{InputEvent, KeyPhase, Point, PointerButton, PointerEvent, PointerPhase};
use slotmark::kernel::services::adapters::settings::{parse_command, parse_keybinding};
use slotmark::kernel::services::adapters::{
    ensure_settings_file, get_settings_path, get_worlds_dir, BreakEvent, WorldIdentity,
};
use slotmark::models::{AnnotationSet, ContainerKey, Facing, PairSide, PairedContainer};

mod logging;

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    /// Player right-clicked a block container: resolve its key and open it. With
    /// `facing` and `side` the neighbour is derived from the block state instead.
    Interact {
        container: PairedContainer,
        dimension: CompactString,
        #[serde(default)]
        facing: Option<Facing>,
        #[serde(default)]
        side: Option<PairSide>,
    },
    Open(OpenContainer),
    Close,
    Break(BreakEvent),
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        held: bool,
    },
    Up {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
    },
    Command {
        name: String,
    },
    /// Print the annotations of `key`, or of the open container.
    Dump {
        #[serde(default)]
        key: Option<ContainerKey>,
    },
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(world_arg) = args.first() else {
        eprintln!("usage: slotmark <world-dir | sp:<name> | mp:<address>> [script.jsonl]");
        std::process::exit(2);
    };

    let log_guard = logging::init();
    if let Some(guard) = &log_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging initialised");
    }

    let Some(world_root) = resolve_world_root(world_arg) else {
        eprintln!("cannot determine the worlds directory");
        std::process::exit(2);
    };
    let settings_path = ensure_settings_file().ok().or_else(get_settings_path);
    tracing::info!(world = %world_root.display(), "replay started");

    let mut workbench = Workbench::open_world(world_root, settings_path);
    let reader: Box<dyn BufRead> = match args.get(1) {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<ScriptEvent>(trimmed) {
            Ok(event) => {
                if let Some(dump) = apply(&mut workbench, event) {
                    writeln!(out, "{dump}")?;
                }
            }
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping script line");
                eprintln!("line {}: {e}", index + 1);
            }
        }
    }

    if let Some(session) = workbench.session() {
        writeln!(out, "{}", dump(session.key(), session.annotations()))?;
    }
    workbench.on_close();
    Ok(())
}

fn resolve_world_root(arg: &str) -> Option<PathBuf> {
    let identity = if let Some(name) = arg.strip_prefix("sp:") {
        WorldIdentity::Local(name.to_string())
    } else if let Some(address) = arg.strip_prefix("mp:") {
        WorldIdentity::Remote(address.to_string())
    } else {
        return Some(PathBuf::from(arg));
    };
    Some(identity.root_in(&get_worlds_dir()?))
}

fn apply(workbench: &mut Workbench, event: ScriptEvent) -> Option<Value> {
    match event {
        ScriptEvent::Interact {
            container,
            dimension,
            facing,
            side,
        } => {
            let container = match (facing, side) {
                (Some(facing), Some(side)) => {
                    PairedContainer::from_facing(container.pos, facing, side)
                }
                _ => container,
            };
            let key = workbench.on_interact_block(&container, &dimension);
            workbench.on_open(OpenContainer::chest(key));
        }
        ScriptEvent::Open(open) => workbench.on_open(open),
        ScriptEvent::Close => workbench.on_close(),
        ScriptEvent::Break(event) => {
            let outcome = workbench.on_break_block(&event);
            tracing::info!(
                outcome = ?outcome,
                survivor = ?outcome.surviving_key(),
                "break handled"
            );
        }
        ScriptEvent::Down { x, y } => {
            workbench.on_event(InputEvent::Pointer(PointerEvent::down(x, y)));
        }
        ScriptEvent::Move { x, y, held } => {
            workbench.on_event(InputEvent::Pointer(PointerEvent {
                pos: Point::new(x, y),
                button: held.then_some(PointerButton::Left),
                phase: PointerPhase::Move,
            }));
        }
        ScriptEvent::Up { x, y } => {
            workbench.on_event(InputEvent::Pointer(PointerEvent::up(x, y)));
        }
        ScriptEvent::Key { key } => match parse_keybinding(&key) {
            Some(key) => {
                if !workbench.on_event(InputEvent::Key(key, KeyPhase::Press)).is_consumed() {
                    tracing::debug!(key = ?key, "key not handled");
                }
            }
            None => tracing::warn!(key = %key, "unparsable key"),
        },
        ScriptEvent::Command { name } => match parse_command(&name) {
            Some(command) => {
                workbench.run_command(command);
            }
            None => tracing::warn!(command = %name, "unknown command"),
        },
        ScriptEvent::Dump { key } => {
            return match key {
                Some(key) => {
                    let set = workbench.persistence().load(&key);
                    Some(dump(&key, &set))
                }
                None => workbench
                    .session()
                    .map(|session| dump(session.key(), session.annotations())),
            };
        }
    }
    None
}

fn dump(key: &ContainerKey, set: &AnnotationSet) -> Value {
    let mut slots = Map::new();
    for slot in set.slot_indices() {
        let Some(annotation) = set.slot(slot) else {
            continue;
        };
        let borders: Map<String, Value> = annotation
            .borders()
            .map(|(direction, color)| {
                (
                    format!("{direction:?}").to_ascii_lowercase(),
                    Value::String(color.to_string()),
                )
            })
            .collect();
        slots.insert(slot.to_string(), Value::Object(borders));
    }
    json!({ "key": key, "slots": slots })
}
