//! Verlauf der ausgeführten Editor-Commands.

use super::EditorCommand;

/// Ausgeführte Commands in Reihenfolge; aufeinanderfolgende `DragTo`
/// werden zu einem Eintrag mit der letzten Zielposition zusammengefasst.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<EditorCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Command auf. Ist das Log voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &EditorCommand) {
        if let (Some(EditorCommand::DragTo { position: last }), EditorCommand::DragTo { position }) =
            (self.entries.last_mut(), command)
        {
            *last = *position;
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[EditorCommand] {
        &self.entries
    }
}
