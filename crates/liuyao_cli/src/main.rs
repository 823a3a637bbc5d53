use clap::{Parser, Subcommand};
use liuyao_base::{
    Branch, CastingInput, CastingResult, Hexagram, LineRecord, Stem, Trigram, calculate,
    void_branches,
};

#[derive(Parser)]
#[command(name = "liuyao", about = "Liuyao casting CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a full casting from six line values and the day context
    Cast {
        /// Six line values 6/7/8/9, bottom to top, comma separated (e.g. 9,8,8,6,7,7)
        lines: String,
        /// Day stem (pinyin or hanzi, e.g. jia or 甲)
        #[arg(long)]
        day_stem: String,
        /// Day branch (pinyin or hanzi, e.g. zi or 子)
        #[arg(long)]
        day_branch: String,
        /// Month branch (pinyin or hanzi)
        #[arg(long)]
        month_branch: String,
    },
    /// Look up a hexagram by upper and lower trigram
    Hexagram {
        /// Upper trigram name (pinyin or hanzi)
        upper: String,
        /// Lower trigram name (pinyin or hanzi)
        lower: String,
    },
    /// Void branch pair for a day
    Xunkong {
        /// Day stem (pinyin or hanzi)
        day_stem: String,
        /// Day branch (pinyin or hanzi)
        day_branch: String,
    },
}

fn parse_stem(s: &str) -> Stem {
    Stem::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid stem name: {s}");
        eprintln!("Valid: Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui");
        std::process::exit(1);
    })
}

fn parse_branch(s: &str) -> Branch {
    Branch::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid branch name: {s}");
        eprintln!("Valid: Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai");
        std::process::exit(1);
    })
}

fn parse_trigram(s: &str) -> Trigram {
    Trigram::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid trigram name: {s}");
        eprintln!("Valid: Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun");
        std::process::exit(1);
    })
}

fn parse_lines(s: &str) -> [u8; 6] {
    let parsed: Vec<u8> = s
        .split(',')
        .map(|part| {
            part.trim().parse::<u8>().unwrap_or_else(|_| {
                eprintln!("Invalid line value: {part}");
                std::process::exit(1);
            })
        })
        .collect();
    parsed.try_into().unwrap_or_else(|v: Vec<u8>| {
        eprintln!("Expected exactly 6 line values, got {}", v.len());
        std::process::exit(1);
    })
}

fn hexagram_summary(h: &Hexagram) -> String {
    format!(
        "{} ({} over {}, {} palace #{}, shi {}, ying {}{})",
        h.name,
        h.upper.name(),
        h.lower.name(),
        h.palace.name(),
        h.palace_order,
        h.shi_position,
        h.ying_position,
        if h.is_you_hun() {
            ", wandering soul"
        } else if h.is_gui_hun() {
            ", returning soul"
        } else {
            ""
        }
    )
}

fn line_row(line: &LineRecord) -> String {
    let marker = if line.is_shi {
        " 世"
    } else if line.is_ying {
        " 應"
    } else {
        ""
    };
    let movement = match (line.is_moving, line.transformed_branch) {
        (true, Some(t)) => {
            let spirit = line
                .advance_retreat
                .map(|ar| format!(" [{}]", ar.chinese()))
                .unwrap_or_default();
            format!(" ×→ {}{}", t.chinese(), spirit)
        }
        _ => String::new(),
    };
    format!(
        "{} {} {}{} {} 月{} 日{}{}{}",
        line.position,
        line.guardian.chinese(),
        line.kinship.chinese(),
        line.branch.chinese(),
        line.polarity.chinese(),
        line.strength_by_month.chinese(),
        line.strength_by_day.chinese(),
        marker,
        movement
    )
}

fn print_casting(result: &CastingResult) {
    println!("本卦: {}", hexagram_summary(result.primary));
    if let Some(t) = result.transformed {
        println!("變卦: {}", hexagram_summary(t));
    }
    // Top line first, the traditional chart orientation.
    for line in result.lines.iter().rev() {
        println!("{}", line_row(line));
    }
    if !result.moving_positions.is_empty() {
        let positions: Vec<String> = result
            .moving_positions
            .iter()
            .map(|p| p.to_string())
            .collect();
        println!("動爻: {}", positions.join(", "));
    }
    for hidden in &result.hidden_spirits {
        println!(
            "伏神: {}{} under line {} ({}{}, {}) 月{} 日{}",
            hidden.kinship.chinese(),
            hidden.branch.chinese(),
            hidden.position,
            hidden.flying_branch.chinese(),
            hidden.flying_element.chinese(),
            hidden.relation.chinese(),
            hidden.strength_by_month.chinese(),
            hidden.strength_by_day.chinese(),
        );
    }
    println!(
        "旬空: {} {}",
        result.void_branches[0].chinese(),
        result.void_branches[1].chinese()
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cast {
            lines,
            day_stem,
            day_branch,
            month_branch,
        } => {
            let values = parse_lines(&lines);
            let stem = parse_stem(&day_stem);
            let day = parse_branch(&day_branch);
            let month = parse_branch(&month_branch);
            let input = CastingInput::from_values(values, stem, day, month).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            print_casting(&calculate(&input));
        }

        Commands::Hexagram { upper, lower } => {
            let h = Hexagram::from_trigrams(parse_trigram(&upper), parse_trigram(&lower));
            println!("{}", hexagram_summary(h));
        }

        Commands::Xunkong {
            day_stem,
            day_branch,
        } => {
            let [a, b] = void_branches(parse_stem(&day_stem), parse_branch(&day_branch));
            println!("{} ({}) / {} ({})", a.name(), a.chinese(), b.name(), b.chinese());
        }
    }
}
