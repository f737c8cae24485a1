use anyhow::Result;
use is_terminal::IsTerminal;
use profile_widgets::presentation::formatters::handle;
use profile_widgets::types::User;
use profile_widgets::{
    DisplayOptions, Node, PictureOptions, RecordingNavigator, RenderFormat, TracingNavigator,
    WidgetConfig, present_user_display, present_user_link, present_user_picture, renderer_for,
};

pub struct RenderContext {
    config: WidgetConfig,
    format: RenderFormat,
}

impl RenderContext {
    pub fn new(config: WidgetConfig, format: RenderFormat) -> Self {
        Self { config, format }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

pub fn display(
    ctx: &RenderContext,
    user: &User,
    options: DisplayOptions,
    activate: bool,
) -> Result<()> {
    let node = present_user_display(user, options, &ctx.config);
    emit(ctx, &node, activate)
}

pub fn picture(
    ctx: &RenderContext,
    user: &User,
    options: PictureOptions,
    activate: bool,
) -> Result<()> {
    let node = present_user_picture(user, options, &ctx.config);
    emit(ctx, &node, activate)
}

pub fn link(
    ctx: &RenderContext,
    username: &str,
    text: Option<String>,
    activate: bool,
) -> Result<()> {
    let content = Node::text(text.unwrap_or_else(|| handle(username)));
    let node = present_user_link(username, content, &ctx.config);
    emit(ctx, &node, activate)
}

fn emit(ctx: &RenderContext, node: &Node, activate: bool) -> Result<()> {
    let color = std::io::stdout().is_terminal();
    let rendered = renderer_for(ctx.format, color).render(node)?;
    println!("{}", rendered);

    if activate {
        let navigator = TracingNavigator::new(RecordingNavigator::new());
        node.activate(&navigator)?;

        match navigator.into_inner().last() {
            Some(request) => println!("navigate {}", request),
            None => println!("no clickable region"),
        }
    }

    Ok(())
}
