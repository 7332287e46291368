use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use permadraw_shared::{Board, BoardConfig, DragState, PlantCatalog, Tool, ToolSettings};

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub config: BoardConfig,
    pub board_width: f64,
    pub board_height: f64,
    pub board: Board,
    pub catalog: PlantCatalog,
    pub drag: DragState,
}

impl State {
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        config: BoardConfig,
        catalog: PlantCatalog,
    ) -> Self {
        let mut tools = ToolSettings::default();
        tools.set_size(Tool::Draw, config.default_size);
        tools.set_size(Tool::Erase, config.default_size);
        let board = Board::new(tools, config.rect_seed);
        Self {
            canvas,
            ctx,
            config,
            board_width: 0.0,
            board_height: 0.0,
            board,
            catalog,
            drag: DragState::default(),
        }
    }
}
