use ratatui::prelude::*;
use ratatui::widgets::*;

use std::collections::HashMap;

use crate::app::App;
use crate::sim::entities::{BULLET_RADIUS, PLAYER_SIZE};
use crate::sim::{Simulation, FIELD_HEIGHT, FIELD_WIDTH};

const FIELD_BG: Color = Color::Rgb(0, 0, 0);
const SHIP_COLOR: Color = Color::Rgb(255, 255, 255);
const BULLET_COLOR: Color = Color::Rgb(255, 255, 0);
const DIM_COLOR: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(120, 120, 160)))
        .title(" Autofire ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 200, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, &app.sim, chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let lines = render_field(&app.sim, fw, fh);
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    render_help(frame, &app.sim, chunks[2]);

    if app.sim.game_over {
        render_game_over(frame, &app.sim, chunks[1]);
    } else if app.sim.paused {
        render_pause_banner(frame, chunks[1]);
    }
}

fn render_status(frame: &mut Frame, sim: &Simulation, area: Rect) {
    let status = Line::from(Span::styled(
        format!(" Score: {}", sim.score),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, sim: &Simulation, area: Rect) {
    if sim.game_over {
        return;
    }
    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            " Arrow keys to move - Auto shooting! ",
            Style::default().fg(Color::Gray),
        ),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("P Pause ", Style::default().fg(Color::DarkGray)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Esc Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}

// ── Braille playfield ──────────────────────────────────────────────────

fn render_field(sim: &Simulation, width: usize, height: usize) -> Vec<Line<'static>> {
    let bw = (width * 2) as i32;
    let bh = (height * 4) as i32;
    let bsx = bw as f32 / FIELD_WIDTH;
    let bsy = bh as f32 / FIELD_HEIGHT;
    // The lost frame stays on screen in gray behind the panel.
    let dim = sim.game_over;

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(FIELD_BG)); width]; height];

    // ── Ship: filled triangle, apex up ─────────────────────────────────
    let mut pmap: HashMap<(usize, usize), u8> = HashMap::new();
    let px = (sim.player.x * bsx) as i32;
    let apex = ((sim.player.y - PLAYER_SIZE) * bsy) as i32;
    let base = ((sim.player.y + PLAYER_SIZE) * bsy) as i32;
    let half_base = (PLAYER_SIZE * bsx) as i32;
    fill_triangle(&mut pmap, px, apex, base, half_base, bw, bh);
    write_layer(&mut grid, &pmap, width, height, paint(SHIP_COLOR, dim), true);

    // ── Bullets ────────────────────────────────────────────────────────
    for bullet in &sim.bullets {
        let mut bmap: HashMap<(usize, usize), u8> = HashMap::new();
        let bx = (bullet.x * bsx) as i32;
        let by = (bullet.y * bsy) as i32;
        let rx = ((BULLET_RADIUS * bsx) as i32).max(1);
        let ry = ((BULLET_RADIUS * bsy) as i32).max(1);
        fill_ellipse(&mut bmap, bx, by, rx, ry, bw, bh);
        write_layer(&mut grid, &bmap, width, height, paint(BULLET_COLOR, dim), true);
    }

    // ── Blocks, drawn last so they win their cells ─────────────────────
    for block in &sim.blocks {
        let mut kmap: HashMap<(usize, usize), u8> = HashMap::new();
        let x0 = (block.x * bsx) as i32;
        let x1 = ((block.x + block.size) * bsx) as i32;
        let y0 = (block.y * bsy) as i32;
        let y1 = ((block.y + block.size) * bsy) as i32;
        for by in y0..=y1 {
            for bx in x0..=x1 {
                set_dot(&mut kmap, bx, by, bw, bh);
            }
        }
        write_layer(&mut grid, &kmap, width, height, paint(block.color, dim), false);
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn paint(color: Color, dim: bool) -> Color {
    if dim {
        DIM_COLOR
    } else {
        color
    }
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut HashMap<(usize, usize), u8>, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
}

fn write_layer(
    grid: &mut [Vec<(char, Style)>],
    map: &HashMap<(usize, usize), u8>,
    w: usize,
    h: usize,
    color: Color,
    bold: bool,
) {
    for (&(cx, cy), &bits) in map {
        if cx < w && cy < h && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(FIELD_BG);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

// Scanline fill from the apex down to the base edge.
fn fill_triangle(
    map: &mut HashMap<(usize, usize), u8>,
    cx: i32,
    top_y: i32,
    bot_y: i32,
    half_base: i32,
    bw: i32,
    bh: i32,
) {
    let rows = (bot_y - top_y).max(1);
    for row in 0..=rows {
        let hw = half_base * row / rows;
        for dx in -hw..=hw {
            set_dot(map, cx + dx, top_y + row, bw, bh);
        }
    }
}

fn fill_ellipse(
    map: &mut HashMap<(usize, usize), u8>,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    bw: i32,
    bh: i32,
) {
    for dy in -ry..=ry {
        for dx in -rx..=rx {
            if dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry {
                set_dot(map, cx + dx, cy + dy, bw, bh);
            }
        }
    }
}

// ── Overlays ───────────────────────────────────────────────────────────

fn render_pause_banner(frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let text = "PAUSED - Press P to continue";
    let w = (text.len() as u16 + 2).min(area.width);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height / 2;
    let banner = Rect::new(x, y.min(area.bottom().saturating_sub(1)), w, 1);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        banner,
    );
}

fn render_game_over(frame: &mut Frame, sim: &Simulation, area: Rect) {
    let overlay_w = 42u16.min(area.width.saturating_sub(2));
    let overlay_h = 7u16.min(area.height);
    if overlay_w < 12 || overlay_h < 5 {
        return;
    }
    let x = area.x + area.width.saturating_sub(overlay_w) / 2;
    let y = area.y + area.height.saturating_sub(overlay_h) / 2;
    let overlay = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay);

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Rgb(15, 5, 5)));
    let inner = panel.inner(overlay);
    frame.render_widget(panel, overlay);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final Score: {}", sim.score),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to Try Again or ESC to Quit",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
