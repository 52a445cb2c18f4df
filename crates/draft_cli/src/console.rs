//! Stdin-backed draft director.

use std::io::{self, BufRead, Write};

use draft_core::{Candidate, Decision, DraftDirector, Track, Unit};

/// Prompts the draft operator on the terminal. Every answer is re-read
/// until it parses; roster validation happens in the core, which calls
/// again on violation.
pub struct ConsoleDirector {
    input: io::Stdin,
}

impl ConsoleDirector {
    pub fn new() -> Self {
        Self { input: io::stdin() }
    }

    fn prompt(&mut self, message: &str) -> String {
        print!("{message}");
        io::stdout().flush().expect("stdout flush");
        let mut line = String::new();
        self.input
            .lock()
            .read_line(&mut line)
            .expect("stdin read");
        line.trim().to_string()
    }

    fn prompt_track(&mut self) -> Track {
        let options = Track::real_tracks()
            .iter()
            .map(Track::name)
            .collect::<Vec<_>>()
            .join(" / ");
        loop {
            let answer = self.prompt(&format!("Enter the track for the chosen candidate ({options}): "));
            match answer.parse::<Track>() {
                Ok(track) => return track,
                Err(err) => println!("Error: {err}"),
            }
        }
    }
}

impl Default for ConsoleDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftDirector for ConsoleDirector {
    fn request_unit_pick(&mut self, unit: Unit) -> String {
        self.prompt(&format!("Enter the candidate id claimed by unit {unit}: "))
    }

    fn confirm_or_override(&mut self, suggestion: &Candidate, track: Track) -> Decision {
        println!(
            "Suggestion for track {track}: {} ({})",
            suggestion.id,
            suggestion.full_name()
        );
        let answer = self.prompt("Accept suggestion? (y/n): ").to_lowercase();
        if answer == "y" {
            return Decision::Accept;
        }
        let candidate_id = self.prompt("Enter the chosen candidate id: ");
        let track = self.prompt_track();
        Decision::Override { candidate_id, track }
    }
}
