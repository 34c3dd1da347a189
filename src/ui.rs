use crate::models::{CATEGORIES, Challenge, CheckInType, Group};

pub fn render_index(public_groups: &[&Group]) -> String {
    let groups = if public_groups.is_empty() {
        r#"<p class="hint">Nenhum grupo público ainda.</p>"#.to_string()
    } else {
        public_groups
            .iter()
            .map(|group| render_group_card(group))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let categories = CATEGORIES
        .iter()
        .map(|category| {
            let category = escape_html(category);
            format!(r#"<option value="{category}">{category}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("");

    page(
        "MotivGym",
        &INDEX_BODY
            .replace("{{CATEGORIES}}", &categories)
            .replace("{{GROUPS}}", &groups),
    )
}

pub fn render_group(group: &Group) -> String {
    let challenges = if group.challenges.is_empty() {
        r#"<p class="hint">Crie o primeiro desafio para o grupo.</p>"#.to_string()
    } else {
        group
            .challenges
            .iter()
            .map(render_challenge)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let check_in_types = CheckInType::ALL
        .iter()
        .map(|kind| format!(r#"<option value="{kind}">{kind}</option>"#))
        .collect::<Vec<_>>()
        .join("");

    let visibility = if group.is_private { "Privado" } else { "Público" };

    page(
        &group.name,
        &GROUP_BODY
            .replace("{{ID}}", &group.id.to_string())
            .replace("{{VISIBILITY}}", visibility)
            .replace("{{MEMBERS}}", &group.members.to_string())
            .replace("{{CHECK_IN_TYPES}}", &check_in_types)
            .replace("{{INVITE_CODE}}", &escape_html(&group.invite_code))
            .replace("{{CATEGORY}}", &escape_html(&group.category))
            .replace("{{DESCRIPTION}}", &escape_html(&group.description))
            .replace("{{NAME}}", &escape_html(&group.name))
            .replace("{{CHALLENGES}}", &challenges),
    )
}

fn render_group_card(group: &Group) -> String {
    format!(
        r#"<a class="card" href="/groups/{id}">
  <strong>{name}</strong>
  <span class="hint">{description}</span>
  <span class="badges"><span class="badge">{category}</span><span class="badge">{members} membros</span></span>
</a>"#,
        id = group.id,
        name = escape_html(&group.name),
        description = escape_html(&group.description),
        category = escape_html(&group.category),
        members = group.members,
    )
}

fn render_challenge(challenge: &Challenge) -> String {
    let note_field = if challenge.check_in_type == CheckInType::Text {
        r#"<textarea name="note" rows="3" placeholder="Descreva seu treino de hoje..." required></textarea>"#
    } else {
        ""
    };

    let participants = challenge
        .participants
        .iter()
        .map(|participant| {
            format!(
                "<li>{} &middot; {} check-ins</li>",
                escape_html(&participant.name),
                participant.check_ins
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="card">
  <strong>{name}</strong>
  <span class="hint">{description}</span>
  <span class="badges"><span class="badge">{duration} dias</span><span class="badge">{kind}</span></span>
  <p class="rules">{rules}</p>
  <ul>{participants}</ul>
  <form method="post" action="/challenges/{id}/check-in">
    <input name="participant" placeholder="Seu nome" required />
    {note_field}
    <button type="submit">Fazer Check-in</button>
  </form>
</div>"#,
        id = challenge.id,
        name = escape_html(&challenge.name),
        description = escape_html(&challenge.description),
        duration = challenge.duration,
        kind = challenge.check_in_type,
        rules = escape_html(&challenge.rules),
    )
}

pub fn render_error(message: &str) -> String {
    page(
        "MotivGym",
        &ERROR_BODY.replace("{{MESSAGE}}", &escape_html(message)),
    )
}

fn page(title: &str, body: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{BODY}}", body)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // Keeps user text from ever forming a template placeholder.
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f1f5f9;
      --ink: #0f172a;
      --muted: #64748b;
      --accent: #2563eb;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(15, 23, 42, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #f8fafc, var(--bg));
      color: var(--ink);
      font-family: system-ui, "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 10px;
      color: inherit;
      text-decoration: none;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .badges {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .badge {
      border: 1px solid rgba(15, 23, 42, 0.15);
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
    }

    form {
      display: grid;
      gap: 8px;
    }

    input, select, textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 8px;
      border: 1px solid rgba(15, 23, 42, 0.2);
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 8px;
      padding: 10px 14px;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .code {
      font-family: ui-monospace, monospace;
      letter-spacing: 0.12em;
    }
  </style>
</head>
<body>
  <main>
{{BODY}}
  </main>
</body>
</html>
"#;

const INDEX_BODY: &str = r#"    <header>
      <h1>MotivGym</h1>
      <p class="hint">Gerenciamento de grupos e desafios</p>
    </header>

    <section class="grid">
      <div class="card">
        <strong>Criar Grupo</strong>
        <form method="post" action="/groups">
          <input name="name" placeholder="Nome do grupo" required />
          <textarea name="description" rows="2" placeholder="Descrição"></textarea>
          <select name="category" required>
            <option value="">Categoria</option>
            {{CATEGORIES}}
          </select>
          <select name="is_private">
            <option value="false">Público</option>
            <option value="true">Privado</option>
          </select>
          <button type="submit">Criar</button>
        </form>
      </div>
      <div class="card">
        <strong>Entrar em Grupo</strong>
        <form method="post" action="/groups/join">
          <input id="invite-code" class="code" name="code" placeholder="Código de convite" required />
          <span id="invite-preview" class="hint"></span>
          <button type="submit">Entrar</button>
        </form>
      </div>
    </section>

    <section>
      <h2>Explorar Grupos</h2>
      <div class="grid">
{{GROUPS}}
      </div>
    </section>

    <script>
      const codeEl = document.getElementById('invite-code');
      const previewEl = document.getElementById('invite-preview');

      codeEl.addEventListener('input', async () => {
        const code = codeEl.value.trim();
        if (!code) {
          previewEl.textContent = '';
          return;
        }
        const res = await fetch(`/api/invites/${encodeURIComponent(code)}`);
        if (!res.ok) {
          previewEl.textContent = 'Código não encontrado';
          return;
        }
        const group = await res.json();
        previewEl.textContent = `${group.name} · ${group.description} · ${group.members} membros · ${group.category}`;
      });
    </script>"#;

const ERROR_BODY: &str = r#"    <header>
      <p><a href="/">&larr; Voltar</a></p>
      <h1>Não foi possível concluir</h1>
      <p class="hint">{{MESSAGE}}</p>
    </header>"#;

const GROUP_BODY: &str = r#"    <header>
      <p><a href="/">&larr; Voltar</a></p>
      <h1>{{NAME}}</h1>
      <p class="hint">{{DESCRIPTION}}</p>
      <p class="badges">
        <span class="badge">{{CATEGORY}}</span>
        <span class="badge">{{VISIBILITY}}</span>
        <span class="badge">{{MEMBERS}} membros</span>
        <span class="badge code">{{INVITE_CODE}}</span>
      </p>
    </header>

    <section class="card">
      <strong>Criar Desafio</strong>
      <form method="post" action="/groups/{{ID}}/challenges">
        <input name="name" placeholder="Nome do desafio" required />
        <textarea name="description" rows="2" placeholder="Descrição"></textarea>
        <input name="duration" inputmode="numeric" placeholder="Duração (dias)" required />
        <textarea name="rules" rows="2" placeholder="Regras"></textarea>
        <select name="check_in_type" required>
          <option value="">Tipo de check-in</option>
          {{CHECK_IN_TYPES}}
        </select>
        <button type="submit">Criar Desafio</button>
      </form>
    </section>

    <section>
      <h2>Desafios</h2>
      <div class="grid">
{{CHALLENGES}}
      </div>
    </section>"#;
