use crate::domain::model::{DropLevel, MenuChoice};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const MENU_HEADER: &str = "Choose an option to clear RAM cache:";
pub const INFO_LABEL: &str = "Info - Learn about the options before choosing";
pub const PROMPT: &str = "Enter your choice (1/2/3/4): ";

pub fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", MENU_HEADER)?;
    for level in DropLevel::ALL_LEVELS {
        writeln!(out, "{}) {}", level, level.menu_label())?;
    }
    writeln!(out, "{}) {}", MenuChoice::INFO_OPTION, INFO_LABEL)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    Ok(())
}

/// 讀取一行；EOF 視為空字串，之後會被判定為無效輸入
pub fn read_choice<R: BufRead>(input: &mut R) -> Result<MenuChoice> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        tracing::debug!("Standard input closed before a choice was entered");
    }
    Ok(MenuChoice::parse(&line))
}
