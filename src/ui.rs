//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Sequence statistics (length, GC content, base composition)
//! - Protein output and the protein built by playback
//! - Codon strip with ORF, cursor and active-codon highlighting
//! - Codon usage and amino-acid composition histograms
//! - Status bar with mode, frame, strand and speed

pub mod glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::codon::Codon;
use crate::genetic_code::three_letter;
use crate::model::{AppMode, AppState};
use glyphs::{bar, Glyphs};

/// Height of the statistics/protein row (including borders).
const TOP_PANEL_HEIGHT: u16 = 8;
/// Height of the codon strip (including borders).
const CODON_PANEL_HEIGHT: u16 = 4;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Screen cells used by one codon in the strip ("ATG ").
const CODON_CELL_WIDTH: u16 = 4;
/// Width of histogram bars.
const HISTOGRAM_BAR_WIDTH: usize = 16;

/// Color scheme for sequence symbols.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Amino acid color scheme, grouped by physicochemical properties.
pub struct AminoAcidColorScheme;

impl ColorScheme for AminoAcidColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            // Hydrophobic
            'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Color::Yellow,
            // Polar
            'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' => Color::Green,
            // Charged positive
            'K' | 'R' | 'H' => Color::Blue,
            // Charged negative
            'D' | 'E' => Color::Red,
            // Stop or unknown
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState, glyphs: &Glyphs) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_PANEL_HEIGHT),
            Constraint::Length(CODON_PANEL_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[0]);

    let histogram_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);

    render_stats_panel(frame, state, glyphs, top_layout[0]);
    render_protein_panel(frame, state, glyphs, top_layout[1]);
    render_codon_strip(frame, state, main_layout[1]);
    render_codon_usage(frame, state, glyphs, histogram_layout[0]);
    render_composition(frame, state, glyphs, histogram_layout[1]);
    render_status_bar(frame, state, glyphs, main_layout[3]);
}

/// Renders length, GC content and base composition bars.
fn render_stats_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let bases = &state.bases;
    let color_scheme = DnaColorScheme;
    let mut lines = vec![
        Line::from(format!("Length: {} nt", bases.length)),
        Line::from(format!(
            "GC {:>3}% {}",
            bases.gc_percent(),
            bar(glyphs, bases.gc_percent() as f64 / 100.0, HISTOGRAM_BAR_WIDTH)
        )),
    ];

    for base in ['A', 'T', 'G', 'C'] {
        let fraction = bases.fraction(base);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<3}", base),
                Style::default()
                    .fg(color_scheme.get_color(base))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:>5.1}% ", fraction * 100.0)),
            Span::styled(
                bar(glyphs, fraction, HISTOGRAM_BAR_WIDTH),
                Style::default().fg(color_scheme.get_color(base)),
            ),
        ]));
    }

    let title = format!("{} [{}]", state.title, state.sequence_type);
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Colors a one-letter protein, or joins three-letter names.
fn protein_spans(protein: &str, three: bool) -> Vec<Span<'static>> {
    if three {
        let names: Vec<&str> = protein.chars().map(three_letter).collect();
        return vec![Span::raw(names.join("-"))];
    }
    let color_scheme = AminoAcidColorScheme;
    protein
        .chars()
        .map(|aa| {
            Span::styled(
                aa.to_string(),
                Style::default().fg(color_scheme.get_color(aa)),
            )
        })
        .collect()
}

/// Renders the translated protein and the playback progress.
fn render_protein_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let view = &state.view;
    let mut lines = Vec::new();

    if view.protein.is_empty() {
        lines.push(Line::from(Span::styled(
            "No start codon (ATG) in this frame",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(protein_spans(&view.protein.one_letter, state.three_letter)));
    }

    let marker = if state.playback.is_running() {
        glyphs.play
    } else {
        glyphs.pause
    };
    let mut built = vec![Span::styled(
        format!("{} ", marker),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    built.extend(protein_spans(state.playback.built(), state.three_letter));
    lines.push(Line::from(built));

    lines.push(Line::from(format!(
        "Length: {} aa {} MW ~ {:.2} kDa",
        view.protein.len(),
        glyphs.h_separator,
        view.molecular_weight_da / 1000.0
    )));

    let structure = if view.structure_eligible {
        "eligible"
    } else {
        "too short"
    };
    let pdb = state.identifier.as_deref().unwrap_or("none");
    lines.push(Line::from(format!(
        "Structure: {} {} PDB: {}",
        structure, glyphs.h_separator, pdb
    )));

    let block = Block::default().borders(Borders::ALL).title(format!(
        "Protein (frame {}, strand {})",
        view.frame, view.strand
    ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Style of one codon cell in the strip.
fn codon_style(state: &AppState, index: usize, codon: &Codon) -> Style {
    let in_orf = state.view.orf.is_some_and(|orf| orf.contains(index));
    let is_stop = state.view.orf.and_then(|orf| orf.stop) == Some(index);

    let mut style = if state.playback.active() == Some(index) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if is_stop {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else if in_orf {
        let first_base = codon.as_str().chars().next().unwrap_or('N');
        Style::default()
            .fg(Color::Black)
            .bg(DnaColorScheme.get_color(first_base))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if index == state.cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }
    style
}

/// Renders the codon strip and the amino acid under each codon.
fn render_codon_strip(frame: &mut Frame, state: &AppState, area: Rect) {
    let codons = &state.view.codons;
    let range = state.viewport.codon_range();
    let end = range.end.min(codons.len());
    let start = range.start.min(end);

    let mut codon_spans = Vec::with_capacity(end - start);
    let mut aa_spans = Vec::with_capacity(end - start);
    for (index, codon) in codons.iter().enumerate().take(end).skip(start) {
        codon_spans.push(Span::styled(codon.to_string(), codon_style(state, index, codon)));
        codon_spans.push(Span::raw(" "));

        let aa = codon.amino_acid();
        aa_spans.push(Span::styled(
            format!("{:<4}", aa),
            Style::default().fg(AminoAcidColorScheme.get_color(aa)),
        ));
    }

    let title = format!(
        "Codons [frame {} | strand {} | {}/{}]",
        state.view.frame,
        state.view.strand,
        (state.cursor + 1).min(codons.len()),
        codons.len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph =
        Paragraph::new(vec![Line::from(codon_spans), Line::from(aa_spans)]).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders codon usage over the whole codon stream.
fn render_codon_usage(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let max = state.view.usage.values().copied().max().unwrap_or(1).max(1);
    let lines: Vec<Line> = state
        .view
        .usage
        .iter()
        .map(|(codon, &count)| {
            Line::from(vec![
                Span::styled(
                    format!("{} {:>5} ", codon, count),
                    Style::default().fg(AminoAcidColorScheme.get_color(codon.amino_acid())),
                ),
                Span::raw(bar(glyphs, count as f64 / max as f64, HISTOGRAM_BAR_WIDTH)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Codon usage ({} distinct)", state.view.usage.len()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the amino-acid composition of the translated protein.
fn render_composition(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let max = state.view.composition.values().copied().max().unwrap_or(1).max(1);
    let lines: Vec<Line> = state
        .view
        .composition
        .iter()
        .map(|(&aa, &count)| {
            let label = if state.three_letter {
                three_letter(aa).to_string()
            } else {
                aa.to_string()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<3} {:>5} ", label, count),
                    Style::default().fg(AminoAcidColorScheme.get_color(aa)),
                ),
                Span::raw(bar(glyphs, count as f64 / max as f64, HISTOGRAM_BAR_WIDTH)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Amino-acid composition");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let playback = if state.playback.is_running() {
        glyphs.play
    } else {
        glyphs.pause
    };
    let position_info = format!(
        "{} {} ms | Frame {} | Strand {} ",
        playback,
        state.playback.interval().as_millis(),
        state.view.frame,
        state.view.strand
    );

    let message = state.status_message.as_deref().unwrap_or("");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat(
                (area.width as usize)
                    .saturating_sub(left_len + position_info.chars().count()),
            ),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Calculates how many codons fit in the strip.
pub fn calculate_visible_codons(terminal_width: u16) -> usize {
    // Account for borders
    (terminal_width.saturating_sub(2) / CODON_CELL_WIDTH) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::classify::SequenceType;
    use crate::model::ViewSettings;
    use crate::sanitize::sanitize;

    #[test]
    fn test_dna_colors() {
        let scheme = DnaColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('T'), Color::Blue);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_amino_acid_colors() {
        let scheme = AminoAcidColorScheme;
        assert_eq!(scheme.get_color('M'), Color::Yellow);
        assert_eq!(scheme.get_color('K'), Color::Blue);
        assert_eq!(scheme.get_color('*'), Color::DarkGray);
    }

    #[test]
    fn test_visible_codons() {
        // 82 - 2 (borders) = 80 cells, 4 per codon
        assert_eq!(calculate_visible_codons(82), 20);
        assert_eq!(calculate_visible_codons(1), 0);
    }

    #[test]
    fn test_render_smoke() {
        let state = AppState::new(
            "demo",
            sanitize("CCCATGAAATAGGGG"),
            SequenceType::Nucleotide,
            Some("1T15".to_string()),
            ViewSettings::default(),
        );
        let glyphs = glyphs::select(false);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &state, &glyphs)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("ATG"));
        assert!(content.contains("PDB: 1T15"));
        assert!(content.contains("Codon usage"));
    }
}
