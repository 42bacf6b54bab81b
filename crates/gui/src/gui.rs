//! The board window, built with Iced.
//!
//! This file follows the Elm architecture, a Model-View-Update pattern:
//! - `ChessApp` is the Model: it owns the game state and the click selection.
//! - `Message` is the Update trigger: square clicks, undo and new game.
//! - `update` applies a message to the model.
//! - `view` renders the board canvas and the status row.

use crate::config::Config;
use chess_engine::{GameState, GameStatus, Move, MoveList, Piece, Player, Square};
use iced::{
    executor, keyboard, mouse,
    widget::{
        canvas::{self, event, Frame, Geometry, Path, Program, Stroke},
        text, Button, Column, Row, Space,
    },
    Application, Color, Command, Element, Font, Length, Pixels, Point, Rectangle, Renderer,
    Settings, Size, Subscription, Theme,
};
use log::{debug, info};

const PIECE_FONT: Font = Font::with_name("DejaVu Sans");
const STATUS_BAR_HEIGHT: f32 = 44.0;

/// Runs the GUI application.
pub fn run(config: Config) -> iced::Result {
    let window_size = Size::new(config.board_size, config.board_size + STATUS_BAR_HEIGHT);
    ChessApp::run(Settings {
        window: iced::window::Settings {
            size: window_size,
            resizable: false,
            ..iced::window::Settings::default()
        },
        ..Settings::with_flags(config)
    })
}

/// Defines the messages that can be sent to the `update` function.
#[derive(Debug, Clone)]
pub enum Message {
    SquareClicked(Square),
    UndoMove,
    NewGame,
}

/// The main application state (the "Model").
pub struct ChessApp {
    config: Config,
    state: GameState,
    /// Legal moves of the side to move, refreshed after every change.
    valid_moves: MoveList,
    selected_square: Option<Square>,
}

impl Application for ChessApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Message>) {
        let mut state = GameState::new();
        let valid_moves = state.valid_moves();
        let app = ChessApp {
            config,
            state,
            valid_moves,
            selected_square: None,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Chess")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SquareClicked(sq) => self.handle_square_clicked(sq),
            Message::UndoMove => self.handle_undo_move(),
            Message::NewGame => self.handle_new_game(),
        }
        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Character("z") => Some(Message::UndoMove),
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let canvas = canvas::Canvas::new(BoardCanvas {
            state: &self.state,
            config: &self.config,
            selected_square: self.selected_square,
            targets: self.selected_targets(),
        })
        .width(Length::Fixed(self.config.board_size))
        .height(Length::Fixed(self.config.board_size));

        let status_row = Row::new()
            .spacing(10)
            .padding(8)
            .height(Length::Fixed(STATUS_BAR_HEIGHT))
            .align_items(iced::Alignment::Center)
            .push(text(self.status_text()).size(Pixels(18.0)))
            .push(Space::with_width(Length::Fill))
            .push(Button::new(text("Undo")).on_press(Message::UndoMove))
            .push(Button::new(text("New Game")).on_press(Message::NewGame));

        Column::new().push(canvas).push(status_row).into()
    }
}

// --- Update Helper Functions ---

impl ChessApp {
    fn is_own_piece(&self, sq: Square) -> bool {
        self.state.board().piece_at(sq).player() == Some(self.state.player_to_move())
    }

    /// First click selects an own piece, the second submits the move if it is legal.
    fn handle_square_clicked(&mut self, sq: Square) {
        if self.state.status() != GameStatus::Active {
            return;
        }

        match self.selected_square {
            Some(from_sq) if from_sq == sq => self.selected_square = None,
            Some(from_sq) => {
                let candidate = Move::new(from_sq, sq, self.state.board());
                if self.valid_moves.contains(&candidate) {
                    info!("{}: {}", self.state.player_to_move(), candidate.notation());
                    self.state.make_move(candidate);
                    self.refresh_moves();
                    self.selected_square = None;
                } else if self.is_own_piece(sq) {
                    self.selected_square = Some(sq);
                } else {
                    debug!("ignoring illegal move {}", candidate.notation());
                    self.selected_square = None;
                }
            }
            None if self.is_own_piece(sq) => self.selected_square = Some(sq),
            None => {}
        }
    }

    fn handle_undo_move(&mut self) {
        if let Some(mv) = self.state.undo_move() {
            info!("undo {}", mv.notation());
            self.refresh_moves();
        }
        self.selected_square = None;
    }

    fn handle_new_game(&mut self) {
        self.state = GameState::new();
        self.refresh_moves();
        self.selected_square = None;
    }

    fn refresh_moves(&mut self) {
        self.valid_moves = self.state.valid_moves();
        match self.state.status() {
            GameStatus::Checkmate => info!("Checkmate! {} wins", self.state.player_to_move().opponent()),
            GameStatus::Stalemate => info!("Stalemate"),
            GameStatus::Active => {}
        }
    }

    fn selected_targets(&self) -> Vec<Square> {
        match self.selected_square {
            Some(from_sq) if self.config.highlight_moves => self
                .valid_moves
                .iter()
                .filter(|mv| mv.from_sq() == from_sq)
                .map(|mv| mv.to_sq())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn status_text(&self) -> String {
        let player = self.state.player_to_move();
        match self.state.status() {
            GameStatus::Checkmate => format!("Checkmate! {} wins", player.opponent()),
            GameStatus::Stalemate => String::from("Stalemate"),
            GameStatus::Active if self.state.in_check() => format!("{} to move, in check", player),
            GameStatus::Active => format!("{} to move", player),
        }
    }
}

/// Maps a point inside the board to its square.
pub fn square_at(pos: Point, square_size: f32) -> Option<Square> {
    if pos.x < 0.0 || pos.y < 0.0 {
        return None;
    }
    let sq = Square::new(
        (pos.y / square_size).floor() as usize,
        (pos.x / square_size).floor() as usize,
    );
    sq.is_valid().then_some(sq)
}

// --- Canvas Drawing Logic ---

struct BoardCanvas<'a> {
    state: &'a GameState,
    config: &'a Config,
    selected_square: Option<Square>,
    targets: Vec<Square>,
}

impl<'a> Program<Message> for BoardCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_squares(&mut frame);
        self.draw_highlights(&mut frame);
        self.draw_pieces(&mut frame);
        self.draw_selected_square_highlight(&mut frame);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: event::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(pos) = cursor.position_in(bounds) {
                if let Some(sq) = square_at(pos, self.config.square_size()) {
                    return (event::Status::Captured, Some(Message::SquareClicked(sq)));
                }
            }
        }
        (event::Status::Ignored, None)
    }
}

// --- Canvas Drawing Helper Functions ---

impl<'a> BoardCanvas<'a> {
    fn square_origin(&self, sq: Square) -> Point {
        let size = self.config.square_size();
        Point::new(sq.col as f32 * size, sq.row as f32 * size)
    }

    fn square_center(&self, sq: Square) -> Point {
        let half = self.config.square_size() / 2.0;
        let origin = self.square_origin(sq);
        Point::new(origin.x + half, origin.y + half)
    }

    fn square_path(&self, sq: Square) -> Path {
        let size = self.config.square_size();
        Path::rectangle(self.square_origin(sq), Size::new(size, size))
    }

    fn draw_squares(&self, frame: &mut Frame) {
        let [lr, lg, lb] = self.config.light_square;
        let [dr, dg, db] = self.config.dark_square;
        for sq in Square::all() {
            let color = if (sq.row + sq.col) % 2 == 0 {
                Color::from_rgb8(lr, lg, lb)
            } else {
                Color::from_rgb8(dr, dg, db)
            };
            frame.fill(&self.square_path(sq), color);
        }
    }

    fn draw_highlights(&self, frame: &mut Frame) {
        // Highlight last move
        if let Some(mv) = self.state.move_log().last() {
            frame.fill(&self.square_path(mv.from_sq()), Color::from_rgba(1.0, 1.0, 0.0, 0.3));
            frame.fill(&self.square_path(mv.to_sq()), Color::from_rgba(1.0, 1.0, 0.0, 0.45));
        }

        if self.state.in_check() {
            let king = self.state.king_location(self.state.player_to_move());
            frame.fill(&self.square_path(king), Color::from_rgba(1.0, 0.0, 0.0, 0.45));
        }

        let radius = self.config.square_size() * 0.15;
        for &target in &self.targets {
            let dot = Path::circle(self.square_center(target), radius);
            frame.fill(&dot, Color::from_rgba(0.0, 0.0, 0.0, 0.25));
        }
    }

    fn draw_pieces(&self, frame: &mut Frame) {
        let size = Pixels(self.config.square_size() * 0.8);
        for (sq, piece) in self.state.board().pieces() {
            let Some(player) = piece.player() else {
                continue;
            };
            let glyph = |content: char, color: Color| canvas::Text {
                content: content.to_string(),
                position: self.square_center(sq),
                color,
                size,
                font: PIECE_FONT,
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Center,
                line_height: iced::widget::text::LineHeight::default(),
                shaping: iced::widget::text::Shaping::Advanced,
            };
            // White pieces: a white solid glyph under the black outline glyph.
            match player {
                Player::White => {
                    frame.fill_text(glyph(solid_glyph(piece), Color::WHITE));
                    frame.fill_text(glyph(outline_glyph(piece), Color::BLACK));
                }
                Player::Black => frame.fill_text(glyph(solid_glyph(piece), Color::BLACK)),
            }
        }
    }

    fn draw_selected_square_highlight(&self, frame: &mut Frame) {
        if let Some(sq) = self.selected_square {
            frame.stroke(
                &self.square_path(sq),
                Stroke::default()
                    .with_width(3.0)
                    .with_color(Color::from_rgb(0.0, 0.4, 1.0)),
            );
        }
    }
}

// --- Utility Functions ---

/// Glyph drawn for a piece code, ignoring colour.
fn solid_glyph(piece: Piece) -> char {
    match &piece.code()[1..] {
        "K" => '♚',
        "Q" => '♛',
        "R" => '♜',
        "B" => '♝',
        "N" => '♞',
        "P" => '♟',
        _ => ' ',
    }
}

fn outline_glyph(piece: Piece) -> char {
    match &piece.code()[1..] {
        "K" => '♔',
        "Q" => '♕',
        "R" => '♖',
        "B" => '♗',
        "N" => '♘',
        "P" => '♙',
        _ => ' ',
    }
}
