#![forbid(unsafe_code)]
use anyhow::{anyhow, bail, Result};
use chrono::{NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use roulement::{
    group_by_week, io,
    model::{Assignment, PersonId},
    planner::Planner,
    storage::{JsonStorage, Storage},
    summarize_day, IcsOptions, TextSummary,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification de la rotation 18h/16h (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'état de planification
    #[arg(long, global = true, default_value = "planning.json")]
    state: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre (5 au maximum)
    AddMember {
        #[arg(long)]
        name: String,
    },

    /// Retirer un membre
    RemoveMember {
        #[arg(long)]
        name: String,
    },

    /// Renommer un membre
    RenameMember {
        #[arg(long)]
        name: String,
        #[arg(long)]
        to: String,
    },

    /// Déplacer un membre dans l'ordre de rotation (position à partir de 1)
    Reorder {
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: usize,
    },

    /// Importer l'équipe depuis un CSV (`name[,leaves]`)
    ImportTeam {
        #[arg(long)]
        csv: String,
    },

    /// Ajouter un congé (bornes incluses, YYYY-MM-DD)
    AddLeave {
        #[arg(long)]
        name: String,
        #[arg(long)]
        from: String,
        /// Par défaut : même jour que `from`
        #[arg(long)]
        to: Option<String>,
    },

    /// Supprimer un congé (index à partir de 0, voir `list-team`)
    RemoveLeave {
        #[arg(long)]
        name: String,
        #[arg(long)]
        index: usize,
    },

    /// Afficher l'équipe et ses congés
    ListTeam,

    /// Afficher ou modifier les paramètres de planification
    Params {
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        skip_weekends: Option<bool>,
    },

    /// (Re)générer le planning
    Generate,

    /// Verrouiller une journée (elle ne sera plus recalculée)
    Lock {
        #[arg(long)]
        date: String,
    },

    /// Déverrouiller une journée
    Unlock {
        #[arg(long)]
        date: String,
    },

    /// Modifier une journée à la main (puis la verrouiller)
    Edit {
        #[arg(long)]
        date: String,
        /// "nom1,nom2,nom3"
        #[arg(long)]
        early: String,
        /// "nom4,nom5"
        #[arg(long)]
        late: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Regrouper l'affichage par semaine ISO
        #[arg(long)]
        by_week: bool,
    },

    /// Vérifier l'équité de la répartition
    Stats {
        /// Export CSV de la répartition (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Exporter le planning au format iCalendar
    Ics {
        #[arg(long)]
        out: String,
        #[arg(long, default_value = "Europe/Paris")]
        timezone: String,
        #[arg(long, default_value = "Bureau")]
        location: String,
        /// HH:MM
        #[arg(long, default_value = "09:00")]
        day_start: String,
        #[arg(long, default_value = "18:00")]
        early_end: String,
        #[arg(long, default_value = "16:00")]
        late_end: String,
    },

    /// Résumé texte d'une journée
    Summary {
        #[arg(long)]
        date: String,
    },

    /// Sauvegarde JSON complète
    Backup {
        #[arg(long)]
        out: String,
    },

    /// Restaurer une sauvegarde JSON
    Restore {
        #[arg(long)]
        path: String,
    },

    /// Effacer toutes les données
    Reset,
}

fn member_id(planner: &Planner, name: &str) -> Result<PersonId> {
    planner
        .state()
        .find_member_by_name(name)
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow!("unknown member: {}", name))
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(raw, "%H:%M")?)
}

fn print_day(a: &Assignment) {
    let mut line = format!(
        "{} | 18h: {} | 16h: {}",
        a.date,
        a.early.join(", "),
        a.late.join(", ")
    );
    if !a.absent.is_empty() {
        line.push_str(&format!(" | absents: {}", a.absent.join(", ")));
    }
    if a.locked {
        line.push_str(" | verrouillé");
    }
    println!("{line}");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.state)?;
    let mut planner = Planner::from_state(storage.load_or_default()?);

    let code = match cli.cmd {
        Commands::AddMember { name } => {
            planner.add_member(&name)?;
            storage.save(planner.state())?;
            0
        }
        Commands::RemoveMember { name } => {
            let id = member_id(&planner, &name)?;
            planner.remove_member(&id)?;
            storage.save(planner.state())?;
            0
        }
        Commands::RenameMember { name, to } => {
            let id = member_id(&planner, &name)?;
            planner.rename_member(&id, &to)?;
            storage.save(planner.state())?;
            0
        }
        Commands::Reorder { name, position } => {
            if position == 0 {
                bail!("position starts at 1");
            }
            let from = planner
                .state()
                .team
                .iter()
                .position(|p| p.name == name)
                .ok_or_else(|| anyhow!("unknown member: {}", name))?;
            planner.reorder_member(from, position - 1)?;
            storage.save(planner.state())?;
            0
        }
        Commands::ImportTeam { csv } => {
            for person in io::import_team_csv(csv)? {
                let id = planner.add_member(&person.name)?;
                for leave in person.leaves {
                    planner.add_leave(&id, leave)?;
                }
            }
            storage.save(planner.state())?;
            0
        }
        Commands::AddLeave { name, from, to } => {
            let id = member_id(&planner, &name)?;
            let raw = match to {
                Some(to) => format!("{from}/{to}"),
                None => from,
            };
            planner.add_leave(&id, io::parse_leave(&raw)?)?;
            storage.save(planner.state())?;
            0
        }
        Commands::RemoveLeave { name, index } => {
            let id = member_id(&planner, &name)?;
            planner.remove_leave(&id, index)?;
            storage.save(planner.state())?;
            0
        }
        Commands::ListTeam => {
            for (pos, p) in planner.state().team.iter().enumerate() {
                println!("{} | {} ({})", pos + 1, p.name, p.initials());
                for (idx, leave) in p.leaves.iter().enumerate() {
                    println!("    congé #{idx}: {} → {}", leave.start, leave.end);
                }
            }
            0
        }
        Commands::Params {
            start,
            days,
            skip_weekends,
        } => {
            let mut params = planner.state().params;
            if let Some(start) = start {
                params.start_date = io::parse_date(&start)?;
            }
            if let Some(days) = days {
                params.number_of_days = days;
            }
            if let Some(skip) = skip_weekends {
                params.skip_weekends = skip;
            }
            planner.set_params(params);
            storage.save(planner.state())?;
            println!(
                "start={} days={} skip_weekends={}",
                params.start_date, params.number_of_days, params.skip_weekends
            );
            0
        }
        Commands::Generate => {
            let days = planner.generate()?.len();
            storage.save(planner.state())?;
            println!("{days} day(s) planned");
            0
        }
        Commands::Lock { date } => {
            planner.lock_day(io::parse_date(&date)?)?;
            storage.save(planner.state())?;
            0
        }
        Commands::Unlock { date } => {
            planner.unlock_day(io::parse_date(&date)?)?;
            storage.save(planner.state())?;
            0
        }
        Commands::Edit { date, early, late } => {
            planner.edit_day(io::parse_date(&date)?, split_names(&early), split_names(&late))?;
            storage.save(planner.state())?;
            0
        }
        Commands::List {
            out_json,
            out_csv,
            by_week,
        } => {
            let assignments = &planner.state().assignments;
            if let Some(path) = out_json {
                io::export_assignments_json(path, assignments)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, assignments)?;
            }
            if by_week {
                for ((year, week), days) in group_by_week(assignments) {
                    println!("== {year}-W{week:02}");
                    days.into_iter().for_each(print_day);
                }
            } else {
                assignments.iter().for_each(print_day);
            }
            0
        }
        Commands::Stats { report } => {
            let stats = planner.distribution_stats();
            for s in &stats {
                println!("{} | 18h: {} | 16h: {} | total: {}", s.name, s.early, s.late, s.total);
            }
            if let Some(path) = report {
                io::export_distribution_csv(path, &stats)?;
            }
            if planner.distribution().is_valid {
                println!("OK: distribution is fair");
                0
            } else {
                eprintln!("Distribution is not fair over full 5-day cycles");
                // Code 2 = WARNING
                2
            }
        }
        Commands::Ics {
            out,
            timezone,
            location,
            day_start,
            early_end,
            late_end,
        } => {
            let opts = IcsOptions {
                timezone: timezone
                    .parse::<Tz>()
                    .map_err(|e| anyhow!("unknown timezone {timezone}: {e}"))?,
                location,
                day_start: parse_time(&day_start)?,
                early_end: parse_time(&early_end)?,
                late_end: parse_time(&late_end)?,
                generated_at: Utc::now(),
                ..IcsOptions::default()
            };
            roulement::export_ics(&out, &planner.state().assignments, &opts)?;
            0
        }
        Commands::Summary { date } => {
            let text = summarize_day(
                &planner.state().assignments,
                io::parse_date(&date)?,
                &TextSummary,
            )?;
            print!("{text}");
            0
        }
        Commands::Backup { out } => {
            io::export_backup_json(&out, planner.state(), Utc::now())?;
            0
        }
        Commands::Restore { path } => {
            let state = io::import_backup_json(path)?;
            storage.save(&state)?;
            0
        }
        Commands::Reset => {
            storage.clear()?;
            0
        }
    };

    std::process::exit(code);
}
