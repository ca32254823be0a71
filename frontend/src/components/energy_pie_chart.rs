use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{ChartSegment, DayChart, Rgb};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 420;
const CANVAS_HEIGHT: u32 = 300;
const PIE_RADIUS: f64 = 80.0;
/// Distance between the rim and a slice's external label
const LABEL_OFFSET: f64 = 30.0;
const LABEL_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);

#[derive(Properties, PartialEq)]
pub struct EnergyPieChartProps {
    pub chart: DayChart,
}

pub struct EnergyPieChart {
    canvas_ref: NodeRef,
}

impl Component for EnergyPieChart {
    type Message = ();
    type Properties = EnergyPieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Err(e) = self.draw_chart(&ctx.props().chart.segments) {
            gloo::console::error!("Failed to draw energy mix chart:", e);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let chart = &ctx.props().chart;

        html! {
            <div class="energy-pie-chart">
                <div class="chart-caption">
                    {chart.title()}
                    <br/>
                    {chart.clean_energy_caption()}
                </div>

                {if chart.segments.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No generation data for this day"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="energy-pie-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                            <ul class="chart-legend">
                                {for chart.segments.iter().map(|segment| html! {
                                    <li class="legend-item">
                                        <span
                                            class="legend-swatch"
                                            style={format!("background-color: {};", segment.color_or_default())}
                                        ></span>
                                        {segment.caption()}
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl EnergyPieChart {
    fn draw_chart(&self, segments: &[ChartSegment]) -> Result<(), String> {
        // Nothing mounted when the day has no segments
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return Ok(()),
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| "canvas has no 2d context".to_string())?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let center = ((CANVAS_WIDTH / 2) as i32, (CANVAS_HEIGHT / 2) as i32);
        let radius = PIE_RADIUS;
        let sizes: Vec<f64> = segments.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = segments
            .iter()
            .map(|s| to_plotters_color(s.color_or_default()))
            .collect();
        let labels: Vec<String> = segments.iter().map(ChartSegment::caption).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 12).into_font().color(&LABEL_COLOR));
        pie.label_offset(LABEL_OFFSET);

        root.draw(&pie).map_err(|e| e.to_string())?;
        root.present().map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn to_plotters_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}
