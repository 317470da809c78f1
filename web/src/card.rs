use crate::utils::*;
use bingo_core as bingo;
use bingo::{BingoError, CardConfig, CardEngine, Coord, Coord2, Line, PoolOutcome};
use clap::Args;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const EXPORT_MIME: &str = "application/json";

/// One-line status shown under the card after an import, export or share.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    fn from_error(err: &BingoError) -> Self {
        use BingoError::*;
        let text = match err {
            Parse(err) => format!("That list could not be loaded: {err}"),
            EmptyPool => "Add at least one label to draw a card".to_string(),
            InvalidCoords => "That cell is not on the card".to_string(),
            Clipboard(reason) => format!("Could not copy the link: {reason}"),
            FileRead(reason) => format!("Could not read the file: {reason}"),
        };
        Self::Error(text)
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Info(_) => "notice",
            Self::Error(_) => "notice error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Msg {
    ToggleCell(Coord2),
    EditLabel(usize, String),
    RemoveLabel(usize),
    AddLabel,
    ResetDefaults,
    Regenerate,
    Export,
    ImportFile(web_sys::File),
    Imported(bingo::Result<String>),
    Share,
    Shared(bingo::Result<String>),
    DismissNotice,
}

fn cell_classes(marked: bool, free: bool, in_line: bool) -> Classes {
    classes!(
        "cell",
        free.then_some("free"),
        marked.then_some("marked"),
        in_line.then_some("line")
    )
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    label: AttrValue,
    #[prop_or_default]
    marked: bool,
    #[prop_or_default]
    free: bool,
    #[prop_or_default]
    in_line: bool,
    callback: Callback<Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        label,
        marked,
        free,
        in_line,
        callback,
    } = props.clone();

    let class = cell_classes(marked, free, in_line);
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        callback.emit((row, col));
    });

    html! {
        <td {class} {onclick}>
            <span>{label}</span>
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct LabelRowProps {
    index: usize,
    text: AttrValue,
    removable: bool,
    onedit: Callback<(usize, String)>,
    onremove: Callback<usize>,
}

#[function_component(LabelRow)]
fn label_row_component(props: &LabelRowProps) -> Html {
    let LabelRowProps {
        index,
        text,
        removable,
        onedit,
        onremove,
    } = props.clone();

    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        onedit.emit((index, input.value()));
    });
    let onclick = Callback::from(move |_: MouseEvent| onremove.emit(index));

    html! {
        <li>
            <input type="text" value={text} {oninput}/>
            <button {onclick} disabled={!removable}>{"Remove"}</button>
        </li>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct CardProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct CardView {
    engine: CardEngine,
    notice: Option<Notice>,
}

impl CardView {
    fn report<T>(&mut self, result: bingo::Result<T>) -> bool {
        if let Err(err) = result {
            log::error!("{}", err);
            self.notice = Some(Notice::from_error(&err));
        }
        true
    }

    fn pool_changed(&mut self, result: bingo::Result<PoolOutcome>) -> bool {
        match result {
            Ok(outcome) => {
                if outcome.regenerates() {
                    self.notice = None;
                }
                outcome.has_update()
            }
            err => self.report(err),
        }
    }

    fn completed_lines(&self) -> Vec<Line> {
        self.engine
            .marks()
            .map(|marks| marks.completed_lines())
            .unwrap_or_default()
    }

    fn view_card(&self, ctx: &Context<Self>) -> Html {
        let Some(grid) = self.engine.grid() else {
            return html! {
                <p class="empty">{"No labels left to draw from."}</p>
            };
        };

        let size = grid.size();
        let lines = self.completed_lines();
        let class = classes!("card", (!lines.is_empty()).then_some("won"));

        html! {
            <table {class}>
                {
                    for (0..size).map(|row| html! {
                        <tr>
                            {
                                for (0..size).map(|col| {
                                    let coords = (row, col);
                                    let label = AttrValue::from(grid.label_at(coords).to_string());
                                    let marked = self.engine.is_marked(coords);
                                    let free = grid.is_free_cell(coords);
                                    let in_line = lines.iter().any(|line| line.contains(coords, size));
                                    let callback = ctx.link().callback(Msg::ToggleCell);
                                    html! {
                                        <CellView {row} {col} {label} {marked} {free} {in_line} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }

    fn view_labels(&self, ctx: &Context<Self>) -> Html {
        let pool = self.engine.pool();
        let removable = pool.len() > 1;
        let onedit = ctx
            .link()
            .callback(|(index, text): (usize, String)| Msg::EditLabel(index, text));
        let onremove = ctx.link().callback(Msg::RemoveLabel);

        html! {
            <ul class="labels">
                {
                    for pool.iter().enumerate().map(|(index, text)| {
                        let text = AttrValue::from(text.to_string());
                        let onedit = onedit.clone();
                        let onremove = onremove.clone();
                        html! {
                            <LabelRow {index} {text} {removable} {onedit} {onremove}/>
                        }
                    })
                }
            </ul>
        }
    }
}

impl Component for CardView {
    type Message = Msg;
    type Properties = CardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let pool = bingo::startup_pool(&BrowserHost);
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            engine: CardEngine::new(CardConfig::default(), pool, seed),
            notice: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            ToggleCell(coords) => match self.engine.toggle(coords) {
                Ok(outcome) => {
                    log::debug!("toggle {:?}: {:?}", coords, outcome);
                    outcome.has_update()
                }
                Err(err) => self.report::<()>(Err(err)),
            },
            EditLabel(index, text) => self.engine.edit_label(index, text).has_update(),
            RemoveLabel(index) => {
                let result = self.engine.remove_label(index);
                self.pool_changed(result)
            }
            AddLabel => {
                let result = self.engine.append_label(String::new());
                self.pool_changed(result)
            }
            ResetDefaults => {
                let result = self.engine.reset_to_default();
                self.pool_changed(result)
            }
            Regenerate => {
                let result = self.engine.regenerate();
                self.report(result)
            }
            Export => {
                let json = self.engine.export();
                match save_text_as_file(bingo::EXPORT_FILE_NAME, &json, EXPORT_MIME) {
                    Ok(()) => false,
                    Err(err) => {
                        let reason = js_error_message(&err);
                        log::error!("export failed: {}", reason);
                        self.notice = Some(Notice::Error(format!("Could not export: {reason}")));
                        true
                    }
                }
            }
            ImportFile(file) => {
                log::debug!("importing {}", file.name());
                ctx.link()
                    .send_future(async move { Imported(read_file_text(file).await) });
                false
            }
            Imported(Ok(text)) => {
                let result = self.engine.import(&text);
                if result.is_ok() {
                    let count = self.engine.pool().len();
                    self.notice = Some(Notice::Info(format!("Imported {count} labels")));
                }
                self.report(result)
            }
            Imported(Err(err)) => self.report::<()>(Err(err)),
            Share => {
                let link = ctx.link().clone();
                bingo::share(
                    self.engine.pool(),
                    &BrowserHost,
                    Box::new(move |result| link.send_message(Shared(result))),
                );
                false
            }
            Shared(Ok(url)) => {
                log::debug!("share link: {}", url);
                self.notice = Some(Notice::Info("Link copied to clipboard".to_string()));
                true
            }
            Shared(Err(err)) => self.report::<()>(Err(err)),
            DismissNotice => self.notice.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_regenerate = ctx.link().callback(|_: MouseEvent| Regenerate);
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetDefaults);
        let cb_add = ctx.link().callback(|_: MouseEvent| AddLabel);
        let cb_export = ctx.link().callback(|_: MouseEvent| Export);
        let cb_share = ctx.link().callback(|_: MouseEvent| Share);
        let cb_dismiss = ctx.link().callback(|_: MouseEvent| DismissNotice);
        let cb_import = ctx.link().batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            file.map(ImportFile)
        });

        html! {
            <div class="bingo">
                { self.view_card(ctx) }
                <nav>
                    <button onclick={cb_regenerate}>{"Regenerate"}</button>
                    <button onclick={cb_share}>{"Share"}</button>
                    <button onclick={cb_export}>{"Export"}</button>
                    <label class="import">
                        {"Import"}
                        <input type="file" accept=".json,application/json" onchange={cb_import}/>
                    </label>
                </nav>
                {
                    for self.notice.iter().map(|notice| html! {
                        <p class={notice.class()} onclick={cb_dismiss.clone()}>{notice.text()}</p>
                    })
                }
                <h2>{"Options"}</h2>
                { self.view_labels(ctx) }
                <footer>
                    <button onclick={cb_add}>{"Add Value"}</button>
                    <button onclick={cb_reset}>{"Reset"}</button>
                </footer>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo::{ParseError, ParseErrorKind};

    #[test]
    fn free_and_marked_cells_get_their_classes() {
        let classes = cell_classes(true, true, false);

        assert!(classes.contains("cell"));
        assert!(classes.contains("free"));
        assert!(classes.contains("marked"));
        assert!(!classes.contains("line"));
    }

    #[test]
    fn plain_cell_only_has_base_class() {
        let classes = cell_classes(false, false, false);

        assert!(classes.contains("cell"));
        assert!(!classes.contains("marked"));
        assert!(!classes.contains("free"));
    }

    #[test]
    fn parse_errors_become_error_notices() {
        let err = BingoError::Parse(ParseError {
            kind: ParseErrorKind::InvalidJson,
            message: "expected value at line 1 column 1".to_string(),
        });

        let notice = Notice::from_error(&err);

        assert_eq!(notice.class(), "notice error");
        assert!(notice.text().starts_with("That list could not be loaded"));
    }

    #[test]
    fn empty_pool_notice_asks_for_labels() {
        let notice = Notice::from_error(&BingoError::EmptyPool);

        assert_eq!(
            notice,
            Notice::Error("Add at least one label to draw a card".to_string())
        );
    }
}
