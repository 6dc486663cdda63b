use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::browser::{Browser, Flow, NavEvent};
use crate::registry::Registry;
use crate::tree::NodeKind;

mod event_loop;
mod input;
mod render;
mod runtime;

pub use self::render::{RESERVED_ROWS, tree_height};
pub use self::runtime::run;
