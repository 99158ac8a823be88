//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorIntent, EditorState};

/// Orchestriert Host-Events und Use-Cases auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        log::debug!("*** Vorher: {:?}\n{}", command, state.level.graph());
        use super::handlers;

        let result = match command {
            // === Auswahl ===
            EditorCommand::BeginDrag { node } => {
                handlers::selection::begin_drag(state, node);
                Ok(())
            }
            EditorCommand::DragTo { position } => handlers::selection::drag_to(state, position),
            EditorCommand::FinishDrag => handlers::selection::finish_drag(state),
            EditorCommand::CancelDrag => {
                handlers::selection::cancel_drag(state);
                Ok(())
            }

            // === Editing ===
            EditorCommand::AddJunction {
                position,
                connect_to,
            } => handlers::editing::add_junction(state, position, connect_to),
            EditorCommand::SplitRoad { edge, position } => {
                handlers::editing::split_road(state, edge, position)
            }
            EditorCommand::RemoveJunction { node } => handlers::editing::remove_junction(state, node),
            EditorCommand::RemoveRoad { edge } => handlers::editing::remove_road(state, edge),
            EditorCommand::ChangeTier { edge, delta } => {
                handlers::editing::change_tier(state, edge, delta)
            }

            // === Datei-I/O ===
            EditorCommand::LoadLevel { path } => handlers::file_io::load(state, path),
            EditorCommand::SaveLevel { path } => handlers::file_io::save(state, path),
        };

        if let Err(e) = &result {
            log::error!("Command fehlgeschlagen: {:#}", e);
        }
        log::debug!("*** Nachher\n{}", state.level.graph());
        result
    }
}
