//! Data model for the interactive viewer.
//!
//! This module contains:
//! - The translation view derived from the sequence, frame and strand
//! - Playback state for the step-by-step codon walk
//! - Application state (cursor, viewport, mode, toggles)
//!
//! The sequence itself never changes. Frame and strand changes rebuild the
//! derived view from it.

use std::collections::BTreeMap;
use std::ops::Range;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::analytics::{
    amino_acid_composition, codon_usage, estimate_molecular_weight_da, BaseComposition,
};
use crate::classify::SequenceType;
use crate::codon::{tokenize, Codon, Frame, Strand};
use crate::sanitize::NucleotideSequence;
use crate::structure::StructureRequest;
use crate::translate::{find_orf, translate_orf, Orf, Protein};

/// Default delay between two playback steps.
pub const DEFAULT_SPEED_MS: u64 = 600;
/// Fastest playback.
pub const MIN_SPEED_MS: u64 = 150;
/// Slowest playback.
pub const MAX_SPEED_MS: u64 = 1200;
/// Speed change per key press.
pub const SPEED_STEP_MS: u64 = 50;

/// Everything derived from the sequence for one frame and strand.
#[derive(Debug, Clone)]
pub struct TranslationView {
    pub frame: Frame,
    pub strand: Strand,
    pub codons: Vec<Codon>,
    pub orf: Option<Orf>,
    pub protein: Protein,
    pub usage: BTreeMap<Codon, usize>,
    pub composition: BTreeMap<char, usize>,
    pub molecular_weight_da: f64,
    /// Whether the protein may be sent for structure prediction
    pub structure_eligible: bool,
}

impl TranslationView {
    /// Computes the view for `frame` and `strand`.
    pub fn compute(seq: &NucleotideSequence, frame: Frame, strand: Strand) -> Self {
        let codons = tokenize(seq, frame, strand);
        let orf = find_orf(&codons);
        let protein = translate_orf(&codons, orf);

        Self {
            frame,
            strand,
            orf,
            usage: codon_usage(seq, frame, strand),
            composition: amino_acid_composition(&protein.one_letter),
            molecular_weight_da: estimate_molecular_weight_da(&protein.one_letter),
            structure_eligible: StructureRequest::new(protein.one_letter.clone()).is_ok(),
            codons,
            protein,
        }
    }
}

/// Step-by-step reveal of the protein along the ORF.
///
/// Driven by [`Playback::tick`]; pausing or resetting cancels the walk.
#[derive(Debug, Clone)]
pub struct Playback {
    orf: Option<Orf>,
    /// Codon shown as active, appended on the next step
    next: usize,
    built: String,
    running: bool,
    finished: bool,
    interval: Duration,
    last_step: Option<Instant>,
}

impl Playback {
    /// Creates a stopped playback over `orf`.
    pub fn new(orf: Option<Orf>, interval: Duration) -> Self {
        Self {
            orf,
            next: orf.map_or(0, |o| o.start),
            built: String::new(),
            running: false,
            finished: false,
            interval,
            last_step: None,
        }
    }

    /// Stops and rewinds to the start codon of `orf`.
    pub fn reset(&mut self, orf: Option<Orf>) {
        *self = Self::new(orf, self.interval);
    }

    /// Starts or pauses. Returns false if there is nothing to play.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.orf.is_none() {
            self.running = false;
            return false;
        }
        if self.running {
            self.running = false;
            return true;
        }
        if self.finished {
            self.reset(self.orf);
        }
        self.running = true;
        self.last_step = Some(now);
        true
    }

    /// Advances one codon if the interval has elapsed.
    ///
    /// Returns true when the state changed. Reaching the stop codon, or the
    /// end of the ORF, finishes playback without appending anything.
    pub fn tick(&mut self, now: Instant, codons: &[Codon]) -> bool {
        if !self.running {
            return false;
        }
        let Some(orf) = self.orf else {
            self.running = false;
            return true;
        };
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_step = Some(now);

        match codons.get(self.next) {
            Some(codon) if orf.contains(self.next) && !codon.is_stop() => {
                self.built.push(codon.amino_acid());
                self.next += 1;
            }
            _ => {
                self.running = false;
                self.finished = true;
            }
        }
        true
    }

    /// Index of the codon highlighted while running.
    pub fn active(&self) -> Option<usize> {
        self.running.then_some(self.next)
    }

    /// Amino acids revealed so far.
    pub fn built(&self) -> &str {
        &self.built
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sets the step delay, clamped to the supported range.
    pub fn set_interval(&mut self, interval: Duration) {
        let ms = (interval.as_millis() as u64).clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        self.interval = Duration::from_millis(ms);
    }
}

/// The visible window over the codon strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Index of the first visible codon
    pub first_codon: usize,
    /// Number of codons that fit on screen
    pub visible_codons: usize,
}

impl Viewport {
    pub fn new(visible_codons: usize) -> Self {
        Self {
            first_codon: 0,
            visible_codons,
        }
    }

    /// Returns the range of visible codons.
    pub fn codon_range(&self) -> Range<usize> {
        self.first_codon..self.first_codon + self.visible_codons
    }

    /// Checks if a codon is visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.codon_range().contains(&index)
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// Initial display settings, from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    pub frame: Frame,
    pub strand: Strand,
    pub three_letter: bool,
    pub interval: Duration,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            frame: Frame::Zero,
            strand: Strand::Forward,
            three_letter: false,
            interval: Duration::from_millis(DEFAULT_SPEED_MS),
        }
    }
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// Name shown in the title (file name or "stdin")
    pub title: String,
    pub sequence: NucleotideSequence,
    pub bases: BaseComposition,
    /// Guess made on the raw input
    pub sequence_type: SequenceType,
    /// PDB identifier from the FASTA header
    pub identifier: Option<String>,
    pub view: TranslationView,
    pub playback: Playback,
    pub viewport: Viewport,
    /// Codon under the cursor
    pub cursor: usize,
    pub three_letter: bool,
    pub mode: AppMode,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the state for a sanitized sequence.
    pub fn new(
        title: impl Into<String>,
        sequence: NucleotideSequence,
        sequence_type: SequenceType,
        identifier: Option<String>,
        settings: ViewSettings,
    ) -> Self {
        let view = TranslationView::compute(&sequence, settings.frame, settings.strand);
        let mut playback = Playback::new(view.orf, Duration::from_millis(DEFAULT_SPEED_MS));
        playback.set_interval(settings.interval);
        let status_message = match sequence_type {
            SequenceType::AminoAcid => {
                Some("Warning: input looks like a protein sequence, not DNA".to_string())
            }
            _ if sequence.is_empty() => Some("No A/T/G/C bases in input".to_string()),
            _ => None,
        };

        Self {
            title: title.into(),
            bases: BaseComposition::of(&sequence),
            sequence,
            sequence_type,
            identifier,
            cursor: view.orf.map_or(0, |o| o.start),
            view,
            playback,
            viewport: Viewport::new(0),
            three_letter: settings.three_letter,
            mode: AppMode::Normal,
            should_quit: false,
            status_message,
        }
    }

    /// Number of codons in the current view.
    pub fn codon_count(&self) -> usize {
        self.view.codons.len()
    }

    /// Updates the viewport size based on terminal dimensions.
    pub fn update_viewport_size(&mut self, visible_codons: usize) {
        self.viewport.visible_codons = visible_codons;
        self.ensure_cursor_visible();
    }

    /// Rebuilds the derived view and rewinds playback.
    fn recompute(&mut self, frame: Frame, strand: Strand) {
        self.view = TranslationView::compute(&self.sequence, frame, strand);
        self.playback.reset(self.view.orf);
        self.cursor = self.view.orf.map_or(0, |o| o.start);
        self.viewport.first_codon = 0;
        self.ensure_cursor_visible();
        info!(
            frame = %frame,
            strand = %strand,
            codons = self.view.codons.len(),
            residues = self.view.protein.len(),
            "translation view recomputed"
        );
    }

    /// Switches to the next reading frame.
    pub fn cycle_frame(&mut self) {
        self.recompute(self.view.frame.next(), self.view.strand);
        self.status_message = Some(format!("Frame {}", self.view.frame));
    }

    /// Switches strand.
    pub fn toggle_strand(&mut self) {
        self.recompute(self.view.frame, self.view.strand.toggled());
        self.status_message = Some(format!("Strand {}", self.view.strand));
    }

    /// Switches between one-letter and three-letter protein display.
    pub fn toggle_three_letter(&mut self) {
        self.three_letter = !self.three_letter;
    }

    /// Starts or pauses playback.
    pub fn toggle_playback(&mut self, now: Instant) {
        if !self.playback.toggle(now) {
            self.status_message = Some("No start codon (ATG) in this frame".to_string());
            return;
        }
        debug!(running = self.playback.is_running(), "playback toggled");
        self.follow_playback();
    }

    /// Stops playback and rewinds it.
    pub fn reset_playback(&mut self) {
        self.playback.reset(self.view.orf);
        self.status_message = None;
    }

    /// Makes playback faster by one step.
    pub fn speed_up(&mut self) {
        let ms = self.playback.interval().as_millis() as u64;
        self.playback
            .set_interval(Duration::from_millis(ms.saturating_sub(SPEED_STEP_MS)));
    }

    /// Makes playback slower by one step.
    pub fn slow_down(&mut self) {
        let ms = self.playback.interval().as_millis() as u64;
        self.playback
            .set_interval(Duration::from_millis(ms + SPEED_STEP_MS));
    }

    /// Advances playback; returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.playback.tick(now, &self.view.codons);
        if changed {
            self.follow_playback();
            if self.playback.is_finished() {
                info!(residues = self.playback.built().len(), "playback finished");
                self.status_message = Some("Translation complete".to_string());
            }
        }
        changed
    }

    /// Keeps the active codon on screen.
    fn follow_playback(&mut self) {
        if let Some(active) = self.playback.active() {
            self.cursor = active.min(self.codon_count().saturating_sub(1));
            self.ensure_cursor_visible();
        }
    }

    /// Moves the cursor left by one codon.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_cursor_visible();
        }
    }

    /// Moves the cursor right by one codon.
    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.codon_count() {
            self.cursor += 1;
            self.ensure_cursor_visible();
        }
    }

    /// Goes to the first codon.
    pub fn goto_first_codon(&mut self) {
        self.cursor = 0;
        self.ensure_cursor_visible();
    }

    /// Goes to the last codon.
    pub fn goto_last_codon(&mut self) {
        self.cursor = self.codon_count().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Ensures the cursor is visible, centering it when it leaves the view.
    fn ensure_cursor_visible(&mut self) {
        if self.viewport.visible_codons == 0 {
            return;
        }
        if !self.viewport.is_visible(self.cursor) {
            let half = self.viewport.visible_codons / 2;
            self.viewport.first_codon = self.cursor.saturating_sub(half);
        }

        // Don't scroll past the end
        if self.viewport.first_codon + self.viewport.visible_codons > self.codon_count() {
            self.viewport.first_codon = self
                .codon_count()
                .saturating_sub(self.viewport.visible_codons);
        }
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(ref cmd) = self.mode.clone() {
            match cmd.as_str() {
                "q" | "quit" => self.should_quit = true,
                _ => {
                    if let Ok(n) = cmd.parse::<usize>() {
                        if n > 0 && n <= self.codon_count() {
                            self.cursor = n - 1; // 1-indexed for user
                            self.ensure_cursor_visible();
                        } else {
                            self.status_message = Some(format!("Invalid codon: {}", n));
                        }
                    } else {
                        self.status_message = Some(format!("Unknown command: {}", cmd));
                    }
                }
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }
}
