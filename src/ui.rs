use crate::models::{AgeRange, Persona, StayLength, Stats, VisitorType};

pub fn render_visitor_form() -> String {
    VISITOR_FORM_HTML
        .replace("{{TYPE_VISITEUR}}", &options(VisitorType::ALL, visitor_type_caption))
        .replace("{{TEMPS_SEJOUR}}", &options(StayLength::ALL, StayLength::label))
        .replace("{{TRANCHE_AGE}}", &options(AgeRange::ALL, AgeRange::label))
        .replace("{{TYPE_PERSONNA}}", &options(Persona::ALL, persona_caption))
}

pub fn render_stats_counter(stats: &Stats) -> String {
    STATS_HTML
        .replace("{{VUES}}", &stats.vues_totales.to_string())
        .replace("{{VISITEURS}}", &stats.nombre_visiteurs.to_string())
}

fn options<T: Copy>(all: &[T], caption: impl Fn(T) -> &'static str) -> String
where
    T: std::fmt::Display,
{
    all.iter()
        .map(|option| {
            format!(
                r#"          <option value="{}">{}</option>"#,
                escape(&option.to_string()),
                escape(caption(*option))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn visitor_type_caption(option: VisitorType) -> &'static str {
    match option {
        VisitorType::Couple => "En couple",
        VisitorType::Famille => "En famille",
        VisitorType::Solitaire => "Seul(e)",
    }
}

fn persona_caption(option: Persona) -> &'static str {
    match option {
        Persona::CulturePatrimoine => "Culture & Patrimoine",
        other => other.label(),
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const VISITOR_FORM_HTML: &str = r#"<div id="formulaire-visiteur">
  <h3>Dites-nous en plus sur votre visite !</h3>
  <form id="form-visiteur">
    <div>
      <label>Vous visitez :</label>
      <select name="type_visiteur" required>
          <option value="">Sélectionnez...</option>
{{TYPE_VISITEUR}}
      </select>
    </div>
    <div>
      <label>Durée de votre séjour :</label>
      <select name="temps_sejour" required>
          <option value="">Sélectionnez...</option>
{{TEMPS_SEJOUR}}
      </select>
    </div>
    <div>
      <label>Votre tranche d'âge :</label>
      <select name="tranche_age" required>
          <option value="">Sélectionnez...</option>
{{TRANCHE_AGE}}
      </select>
    </div>
    <div>
      <label>Ce qui vous intéresse le plus :</label>
      <select name="type_personna" required>
          <option value="">Sélectionnez...</option>
{{TYPE_PERSONNA}}
      </select>
    </div>
    <button type="submit">Envoyer</button>
  </form>
  <div id="message-succes" style="display:none; color:green;">
    Merci pour vos informations ! 🎉
  </div>
</div>
"#;

const STATS_HTML: &str = r#"<p>🏖️ {{VUES}} visiteurs ont exploré notre région</p>
<p>👥 {{VISITEURS}} profils de voyageurs collectés</p>
"#;
