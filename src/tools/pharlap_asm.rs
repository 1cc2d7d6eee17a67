//! Phar Lap ETS 386ASM assembler binding.
//!
//! Delegates to the baseline assembler tool for defaults, then overwrites
//! the assembler variables with the 386ASM executable, an empty flag list,
//! and the Phar Lap command templates (sources before the `-o` output flag),
//! and finally registers the installation search paths.

use crate::env::{Environment, FlagList, Value};
use crate::error::Result;
use crate::tools::{add_pharlap_paths, GasTool, Tool};

/// Name of the Phar Lap assembler binary.
const EXECUTABLE: &str = "386asm";

/// The Phar Lap ETS 386ASM assembler tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct PharLapAsmTool;

impl Tool for PharLapAsmTool {
    fn name(&self) -> &'static str {
        EXECUTABLE
    }

    fn initialize(&self, env: &mut Environment) -> Result<()> {
        // Baseline first; its defaults must lose to the overwrites below.
        GasTool.initialize(env)?;

        env.set("AS", EXECUTABLE);
        env.set("ASFLAGS", FlagList::new());
        env.set("ASPPFLAGS", Value::template("$ASFLAGS"));
        env.set("ASCOM", Value::template("$AS $ASFLAGS $SOURCES -o $TARGET"));
        env.set(
            "ASPPCOM",
            Value::template(
                "$CC $ASPPFLAGS $CPPFLAGS $_CPPDEFFLAGS $_CPPINCFLAGS $SOURCES -o $TARGET",
            ),
        );

        add_pharlap_paths(env)
    }

    fn is_available(&self, env: &Environment) -> bool {
        env.detect(EXECUTABLE)
    }
}
