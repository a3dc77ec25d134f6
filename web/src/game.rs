use crate::api::HttpCluesApi;
use crate::utils::js_random_seed;
use clap::Args;
use jeopardy_core::{self as game, Board, CellView, ClueAddr, FetchResult};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Board plus the presentation state around it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    board: Board,
    phase: Phase,
}

impl GameSession {
    fn new() -> Self {
        Self {
            board: Board::empty(),
            phase: Phase::Idle,
        }
    }

    fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Returns false when a load is already in flight, the trigger is then ignored.
    fn begin_loading(&mut self) -> bool {
        if self.is_loading() {
            log::warn!("game is already loading, ignoring trigger");
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    fn finish_loading(&mut self, result: FetchResult<Board>) {
        match result {
            Ok(board) => {
                log::debug!("board ready with {} categories", board.columns());
                self.render(board);
            }
            Err(err) => {
                log::error!("could not load a new board: {}", err);
                self.phase = Phase::Failed(err.to_string());
            }
        }
    }

    /// Replaces the board, every cell goes back to its placeholder.
    fn render(&mut self, mut board: Board) {
        board.reset();
        self.board = board;
        self.phase = Phase::Ready;
    }

    fn reveal(&mut self, addr: ClueAddr) -> bool {
        if self.is_loading() {
            return false;
        }
        self.board.reveal(addr).has_update()
    }

    fn trigger_label(&self) -> &'static str {
        match &self.phase {
            Phase::Idle => "Start",
            Phase::Loading => "Loading...",
            Phase::Failed(_) if self.board.is_empty() => "Start",
            Phase::Ready | Phase::Failed(_) => "Restart Game",
        }
    }

    fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RevealOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ViewCell {
    Placeholder,
    Question(AttrValue),
    Answer(AttrValue),
    Empty,
}

impl From<CellView<'_>> for ViewCell {
    fn from(cell: CellView<'_>) -> Self {
        match cell {
            CellView::Placeholder => Self::Placeholder,
            CellView::Question(text) => Self::Question(AttrValue::from(text.to_string())),
            CellView::Answer(text) => Self::Answer(AttrValue::from(text.to_string())),
            CellView::Empty => Self::Empty,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Msg {
    Start,
    Loaded(FetchResult<Board>),
    Reveal(ClueAddr),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    addr: ClueAddr,
    cell: ViewCell,
    #[prop_or_default]
    locked: bool,
    callback: Callback<ClueAddr>,
}

#[function_component(ClueCellView)]
fn clue_cell_component(props: &CellProps) -> Html {
    use ViewCell::*;

    let CellProps {
        addr,
        cell,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell {
            Placeholder => classes!(),
            Question(_) => classes!("question"),
            Answer(_) => classes!("answer"),
            Empty => classes!("empty"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("click {:?} (locked: {})", addr, locked);
        if !locked {
            callback.emit(addr);
        }
    });

    let text = match cell {
        Placeholder => AttrValue::from(game::PLACEHOLDER),
        Question(text) | Answer(text) => text,
        Empty => AttrValue::from(""),
    };

    html! {
        <td {class} {onclick}>{text.to_string()}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Base address of the clue service
    #[arg(long, default_value = game::DEFAULT_API_BASE_URL)]
    pub(crate) api: String,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    api: HttpCluesApi,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Start);
        Self {
            session: GameSession::new(),
            api: HttpCluesApi::new(&ctx.props().api),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                if !self.session.begin_loading() {
                    return false;
                }
                let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
                log::debug!("new game, seed: {}", seed);

                let api = self.api.clone();
                ctx.link()
                    .send_future(async move { Loaded(game::fetch_board(&api, seed).await) });
                true
            }
            Loaded(result) => {
                self.session.finish_loading(result);
                true
            }
            Reveal(addr) => self.session.reveal(addr),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let board = &self.session.board;
        let loading = self.session.is_loading();
        let label = self.session.trigger_label();
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="start-button" onclick={cb_start} disabled={loading}>{label}</button>
                </nav>
                if let Some(message) = self.session.error_message() {
                    <p class="error">{message.to_string()}</p>
                }
                if loading {
                    <div class="loading">{"Loading..."}</div>
                } else {
                    <table id="board">
                        <thead>
                            <tr>
                                { for board.headers().map(|title| html! { <th>{title.to_string()}</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for (0..board.rows()).map(|clue| html! {
                                    <tr>
                                        {
                                            for (0..board.columns()).map(|category| {
                                                let addr = ClueAddr::new(category, clue);
                                                let cell = ViewCell::from(board.cell_at(addr));
                                                let locked = !board.can_reveal_at(addr);
                                                let callback = ctx.link().callback(Msg::Reveal);
                                                html! {
                                                    <ClueCellView {addr} {cell} {locked} {callback}/>
                                                }
                                            })
                                        }
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                }
            </div>
        }
    }
}
