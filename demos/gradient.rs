use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rgb::RGB8;
use color_quiz::{color::{css_string, parse_hex},
                 Direction, GradientBank, GradientColorRecord,
                 GradientQuizQuestion, HslColor, SortType};

type Err = Box<dyn Error>;

/// Grey of the same HSL lightness as `c`, the way a candidate should
/// perceive a lightness ordering.
fn lightness_grey(c: RGB8) -> RGB8 {
    let l = (255. * c.to_hsl().l).round() as u8;
    RGB8 { r: l, g: l, b: l }
}

fn table_of_colors(fh: &mut impl Write, colors: &[GradientColorRecord],
                   width: u32, comment: &str) -> Result<(), Err> {
    let rgb: Vec<RGB8> = colors.iter()
        .map(|c| parse_hex(&c.color_code).unwrap_or_default())
        .collect();
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (&c, color) in rgb.iter().zip(colors) {
        writeln!(fh, "  <td title=\"{}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 color.color_name, css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in &rgb {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(lightness_grey(c)))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn question(fh: &mut impl Write, q: &GradientQuizQuestion,
            rng: &mut ChaCha8Rng) -> Result<(), Err> {
    writeln!(fh, "<h3>{} ({:?}, {:?})</h3>", q.description, q.sort_type,
             q.direction)?;
    table_of_colors(fh, &q.scrambled(rng), 43, "presented")?;
    table_of_colors(fh, &q.correct_order(), 43, "answer")?;
    Ok(())
}

fn sample_bank() -> Vec<GradientQuizQuestion> {
    let c = |name: &str, code: &str| GradientColorRecord {
        color_name: name.to_string(), system_name: String::new(),
        color_code: code.to_string(), munsell_value: String::new() };
    let colors = vec![c("桜色", "#FEF4F4"), c("薄紅", "#F0908D"),
                      c("紅", "#D7003A"), c("臙脂", "#B94047"),
                      c("蘇芳", "#9E3D3F")];
    vec![GradientQuizQuestion {
             id: 1, sort_type: SortType::Lightness, direction: Direction::Desc,
             description: "明るい順に並べてください".to_string(),
             colors: colors.clone() },
         GradientQuizQuestion {
             id: 2, sort_type: SortType::Saturation, direction: Direction::Asc,
             description: "彩度の低い順に並べてください".to_string(),
             colors }]
}

fn main() -> Result<(), Err> {
    // Optional argument: a JSON bank of gradient questions.
    let bank = match env::args().nth(1) {
        Some(path) => GradientBank::from_json_file(path)?.questions().to_vec(),
        None => sample_bank(),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <meta charset=\"utf-8\">\n\
                  <title>Color quiz: gradient questions</title>\n\
                  </head>\n\
                  <body>")?;
    for q in &bank {
        question(&mut fh, q, &mut rng)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
