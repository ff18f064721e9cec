//! Common component fixtures for tests.

use nesc_refactor::syntax::{ComponentDecl, InterfaceDecl};

/// module Logger {
///   provides interface Read as R;
///   provides interface Write;
/// }
pub fn logger() -> ComponentDecl {
    ComponentDecl::module("Logger")
        .provides(InterfaceDecl::new("Read").alias("R"))
        .provides(InterfaceDecl::new("Write"))
}

/// Two references aliased to the same name.
pub fn duplicate_alias() -> ComponentDecl {
    ComponentDecl::module("Dup")
        .provides(InterfaceDecl::new("Read").alias("X"))
        .provides(InterfaceDecl::new("Write").alias("X"))
}

/// A reference whose interface type is missing but which still carries an alias.
pub fn partial_reference() -> ComponentDecl {
    ComponentDecl::module("Partial")
        .provides(InterfaceDecl::new("Read").alias("R"))
        .uses(InterfaceDecl::unnamed().alias("Orphan"))
        .uses(InterfaceDecl::new("Write"))
}

pub fn empty_module() -> ComponentDecl {
    ComponentDecl::module("Empty")
}

/// Only bare command/event clauses, no interfaces.
pub fn commands_only() -> ComponentDecl {
    ComponentDecl::module("MainC")
        .provides_command("init")
        .uses_event("booted")
}

/// A radio stack mixing braced and single clauses, type arguments and parameters.
pub fn radio_stack() -> ComponentDecl {
    ComponentDecl::configuration("RadioStackC")
        .generic()
        .provides_all(vec![
            InterfaceDecl::new("SplitControl").alias("Control"),
            InterfaceDecl::new("AMSend").alias("Send").parameter("am_id_t", "id"),
            InterfaceDecl::new("Receive"),
        ])
        .uses(InterfaceDecl::new("Timer").type_arg("TMilli").alias("BackoffTimer"))
        .uses_event("overflow")
        .uses(InterfaceDecl::new("Leds"))
        .call("Control", "start")
        .call("BackoffTimer", "startOneShot")
        .signal("Send", "sendDone")
}

/// Logger with an implementation body that uses its aliases.
pub fn logger_with_body() -> ComponentDecl {
    logger()
        .uses(InterfaceDecl::new("Timer").type_arg("TMilli").alias("T"))
        .call("R", "read")
        .call("T", "startPeriodic")
        .call("Write", "write")
        .signal("R", "readDone")
}
