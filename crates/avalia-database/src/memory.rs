//! Process-local store used for tests, demos and the `memory` provider.
//!
//! All tables sit behind a single [`RwLock`], so every mutation observes and
//! commits a consistent snapshot. The uniqueness, reference and restrict
//! rules mirror the constraints declared in the SQL migrations.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use avalia_core::error::AppError;
use avalia_core::result::AppResult;
use avalia_core::types::PageRequest;
use avalia_entity::{
    BehavioralEvaluation, BehavioralEvaluationPatch, CreateEmployee, Cycle, CyclePatch,
    CycleStatus, DeliverablesEvaluation, DeliverablesEvaluationPatch, Employee, EmployeeChanges,
    EmployeeFilter, Evaluation, EvaluationFilter, EvaluationStatus, Goal, GoalFilter, GoalPatch,
    NewBehavioralEvaluation, NewCycle, NewDeliverablesEvaluation, NewGoal,
};

use crate::repository::{
    BehavioralEvaluationRepository, CycleRepository, DeliverablesEvaluationRepository,
    EmployeeRepository, GoalRepository,
};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
struct Tables {
    employees: Table<Employee>,
    cycles: Table<Cycle>,
    behavioral: Table<BehavioralEvaluation>,
    deliverables: Table<DeliverablesEvaluation>,
    goals: Table<Goal>,
}

impl Tables {
    fn employee(&self, matricula: &str) -> Option<&Employee> {
        self.employees.rows.values().find(|e| e.matricula == matricula)
    }

    fn employee_mut(&mut self, matricula: &str) -> Option<&mut Employee> {
        self.employees
            .rows
            .values_mut()
            .find(|e| e.matricula == matricula)
    }

    fn email_taken(&self, email: &str, except_id: Option<i32>) -> bool {
        self.employees
            .rows
            .values()
            .any(|e| e.email == email && Some(e.id) != except_id)
    }

    fn require_cycle(&self, ciclo_id: i32) -> AppResult<()> {
        if self.cycles.rows.contains_key(&ciclo_id) {
            Ok(())
        } else {
            Err(AppError::not_found("Ciclo não encontrado"))
        }
    }

    fn require_employee(&self, matricula: &str, message: &str) -> AppResult<()> {
        match self.employee(matricula) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(message.to_string())),
        }
    }

    fn cycle_in_use(&self, ciclo_id: i32) -> bool {
        self.behavioral.rows.values().any(|e| e.ciclo_id == ciclo_id)
            || self.deliverables.rows.values().any(|e| e.ciclo_id == ciclo_id)
            || self.goals.rows.values().any(|g| g.ciclo_id == ciclo_id)
    }
}

fn page_of<'a, T: Clone + 'a>(
    rows: impl Iterator<Item = &'a T>,
    page: PageRequest,
) -> Vec<T> {
    page.slice(rows.cloned())
}

/// Per-evaluation averages of `matricula` as the evaluated party in `ciclo_id`.
fn averages_of<'a, E: Evaluation + 'a>(
    rows: impl Iterator<Item = &'a E>,
    matricula: &str,
    ciclo_id: i32,
) -> Vec<f64> {
    rows.filter(|e| e.avaliado_matricula() == matricula && e.ciclo_id() == ciclo_id)
        .map(Evaluation::average)
        .collect()
}

/// In-memory implementation of every repository trait.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_by_matricula(&self, matricula: &str) -> AppResult<Option<Employee>> {
        Ok(self.tables.read().await.employee(matricula).cloned())
    }

    async fn list(&self, filter: EmployeeFilter, page: PageRequest) -> AppResult<Vec<Employee>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.employees.rows.values().filter(|e| filter.matches(e)),
            page,
        ))
    }

    async fn list_subordinates(
        &self,
        gestor_matricula: &str,
        filter: EmployeeFilter,
    ) -> AppResult<Vec<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables
            .employees
            .rows
            .values()
            .filter(|e| e.is_managed_by(gestor_matricula) && filter.matches(e))
            .cloned()
            .collect())
    }

    async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let mut tables = self.tables.write().await;

        if tables.employee(&data.matricula).is_some() {
            return Err(AppError::conflict("Matrícula já cadastrada"));
        }
        if tables.email_taken(&data.email, None) {
            return Err(AppError::conflict("Email já cadastrado"));
        }
        if let Some(gestor) = data.gestor_matricula.as_deref() {
            if gestor == data.matricula {
                return Err(AppError::validation(
                    "Colaborador não pode ser gestor de si mesmo",
                ));
            }
            tables.require_employee(gestor, "Gestor não encontrado")?;
        }

        let now = Utc::now();
        let id = tables.employees.next_id();
        let employee = Employee {
            id,
            matricula: data.matricula,
            nome: data.nome,
            email: data.email,
            senha_hash: data.senha_hash,
            cargo: data.cargo,
            departamento: data.departamento,
            gestor_matricula: data.gestor_matricula,
            ativo: true,
            criado_em: now,
            atualizado_em: now,
        };
        tables.employees.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, matricula: &str, changes: EmployeeChanges) -> AppResult<Employee> {
        let mut tables = self.tables.write().await;

        let id = tables
            .employee(matricula)
            .map(|e| e.id)
            .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;

        if let Some(email) = changes.email.as_deref() {
            if tables.email_taken(email, Some(id)) {
                return Err(AppError::conflict("Email já cadastrado"));
            }
        }
        if let Some(gestor) = changes.new_manager() {
            if gestor == matricula {
                return Err(AppError::validation(
                    "Colaborador não pode ser gestor de si mesmo",
                ));
            }
            tables.require_employee(gestor, "Gestor não encontrado")?;
        }

        let employee = tables
            .employee_mut(matricula)
            .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;
        changes.apply(employee);
        Ok(employee.clone())
    }

    async fn deactivate(&self, matricula: &str) -> AppResult<Employee> {
        let mut tables = self.tables.write().await;
        let employee = tables
            .employee_mut(matricula)
            .ok_or_else(|| AppError::not_found("Colaborador não encontrado"))?;
        if !employee.ativo {
            return Err(AppError::conflict("Colaborador já está inativo"));
        }
        employee.ativo = false;
        employee.atualizado_em = Utc::now();
        Ok(employee.clone())
    }
}

#[async_trait]
impl CycleRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Cycle>> {
        Ok(self.tables.read().await.cycles.rows.get(&id).cloned())
    }

    async fn find_active(&self) -> AppResult<Option<Cycle>> {
        let tables = self.tables.read().await;
        Ok(tables
            .cycles
            .rows
            .values()
            .filter(|c| c.status == CycleStatus::EmAndamento)
            .max_by_key(|c| c.ano)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> AppResult<Vec<Cycle>> {
        let tables = self.tables.read().await;
        Ok(page_of(tables.cycles.rows.values(), page))
    }

    async fn create(&self, data: NewCycle) -> AppResult<Cycle> {
        data.check_dates()?;
        let mut tables = self.tables.write().await;

        if tables.cycles.rows.values().any(|c| c.ano == data.ano) {
            return Err(AppError::conflict(format!(
                "Já existe um ciclo para o ano {}",
                data.ano
            )));
        }

        let now = Utc::now();
        let id = tables.cycles.next_id();
        let cycle = Cycle {
            id,
            ano: data.ano,
            descricao: data.descricao,
            data_inicio: data.data_inicio,
            data_fim: data.data_fim,
            status: data.status,
            criado_em: now,
            atualizado_em: now,
        };
        tables.cycles.rows.insert(id, cycle.clone());
        Ok(cycle)
    }

    async fn update(&self, id: i32, patch: CyclePatch) -> AppResult<Cycle> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .cycles
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Ciclo não encontrado"))?;

        let mut cycle = stored.clone();
        patch.apply(&mut cycle);
        cycle.check_dates()?;
        *stored = cycle.clone();
        Ok(cycle)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.cycles.rows.contains_key(&id) {
            return Err(AppError::not_found("Ciclo não encontrado"));
        }
        if tables.cycle_in_use(id) {
            return Err(AppError::conflict(
                "Ciclo possui avaliações ou metas vinculadas",
            ));
        }
        tables.cycles.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl BehavioralEvaluationRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<BehavioralEvaluation>> {
        Ok(self.tables.read().await.behavioral.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<BehavioralEvaluation>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.behavioral.rows.values().filter(|e| filter.matches(*e)),
            page,
        ))
    }

    async fn create(&self, data: NewBehavioralEvaluation) -> AppResult<BehavioralEvaluation> {
        let mut tables = self.tables.write().await;
        tables.require_cycle(data.ciclo_id)?;
        tables.require_employee(&data.avaliado_matricula, "Colaborador avaliado não encontrado")?;
        tables.require_employee(&data.avaliador_matricula, "Colaborador avaliador não encontrado")?;

        let now = Utc::now();
        let id = tables.behavioral.next_id();
        let media_competencias = data.media_competencias();
        let evaluation = BehavioralEvaluation {
            id,
            ciclo_id: data.ciclo_id,
            avaliado_matricula: data.avaliado_matricula,
            avaliador_matricula: data.avaliador_matricula,
            tipo_avaliacao: data.tipo_avaliacao,
            lideranca: data.lideranca,
            comunicacao: data.comunicacao,
            trabalho_equipe: data.trabalho_equipe,
            resolucao_problemas: data.resolucao_problemas,
            adaptabilidade: data.adaptabilidade,
            media_competencias,
            comentarios: data.comentarios,
            status: EvaluationStatus::Pendente,
            criado_em: now,
            atualizado_em: now,
        };
        tables.behavioral.rows.insert(id, evaluation.clone());
        Ok(evaluation)
    }

    async fn update(
        &self,
        id: i32,
        patch: BehavioralEvaluationPatch,
    ) -> AppResult<BehavioralEvaluation> {
        let mut tables = self.tables.write().await;
        let evaluation = tables
            .behavioral
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;
        patch.apply(evaluation);
        Ok(evaluation.clone())
    }

    async fn complete(&self, id: i32) -> AppResult<BehavioralEvaluation> {
        let mut tables = self.tables.write().await;
        let evaluation = tables
            .behavioral
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;
        if evaluation.status.is_completed() {
            return Err(AppError::conflict("Avaliação já está concluída"));
        }
        evaluation.status = EvaluationStatus::Concluida;
        evaluation.atualizado_em = Utc::now();
        Ok(evaluation.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        match self.tables.write().await.behavioral.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Avaliação não encontrada")),
        }
    }

    async fn averages_for(&self, matricula: &str, ciclo_id: i32) -> AppResult<Vec<f64>> {
        let tables = self.tables.read().await;
        Ok(averages_of(tables.behavioral.rows.values(), matricula, ciclo_id))
    }
}

#[async_trait]
impl DeliverablesEvaluationRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<DeliverablesEvaluation>> {
        Ok(self.tables.read().await.deliverables.rows.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &EvaluationFilter,
        page: PageRequest,
    ) -> AppResult<Vec<DeliverablesEvaluation>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.deliverables.rows.values().filter(|e| filter.matches(*e)),
            page,
        ))
    }

    async fn create(&self, data: NewDeliverablesEvaluation) -> AppResult<DeliverablesEvaluation> {
        let mut tables = self.tables.write().await;
        tables.require_cycle(data.ciclo_id)?;
        tables.require_employee(&data.avaliado_matricula, "Colaborador avaliado não encontrado")?;
        tables.require_employee(&data.avaliador_matricula, "Colaborador avaliador não encontrado")?;

        let now = Utc::now();
        let id = tables.deliverables.next_id();
        let media_entregas = data.media_entregas();
        let evaluation = DeliverablesEvaluation {
            id,
            ciclo_id: data.ciclo_id,
            avaliado_matricula: data.avaliado_matricula,
            avaliador_matricula: data.avaliador_matricula,
            qualidade: data.qualidade,
            prazo: data.prazo,
            produtividade: data.produtividade,
            impacto: data.impacto,
            inovacao: data.inovacao,
            media_entregas,
            comentarios: data.comentarios,
            status: EvaluationStatus::Pendente,
            criado_em: now,
            atualizado_em: now,
        };
        tables.deliverables.rows.insert(id, evaluation.clone());
        Ok(evaluation)
    }

    async fn update(
        &self,
        id: i32,
        patch: DeliverablesEvaluationPatch,
    ) -> AppResult<DeliverablesEvaluation> {
        let mut tables = self.tables.write().await;
        let evaluation = tables
            .deliverables
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;
        patch.apply(evaluation);
        Ok(evaluation.clone())
    }

    async fn complete(&self, id: i32) -> AppResult<DeliverablesEvaluation> {
        let mut tables = self.tables.write().await;
        let evaluation = tables
            .deliverables
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Avaliação não encontrada"))?;
        if evaluation.status.is_completed() {
            return Err(AppError::conflict("Avaliação já está concluída"));
        }
        evaluation.status = EvaluationStatus::Concluida;
        evaluation.atualizado_em = Utc::now();
        Ok(evaluation.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        match self.tables.write().await.deliverables.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Avaliação não encontrada")),
        }
    }

    async fn averages_for(&self, matricula: &str, ciclo_id: i32) -> AppResult<Vec<f64>> {
        let tables = self.tables.read().await;
        Ok(averages_of(tables.deliverables.rows.values(), matricula, ciclo_id))
    }
}

#[async_trait]
impl GoalRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Goal>> {
        Ok(self.tables.read().await.goals.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &GoalFilter, page: PageRequest) -> AppResult<Vec<Goal>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            tables.goals.rows.values().filter(|g| filter.matches(g)),
            page,
        ))
    }

    async fn create(&self, data: NewGoal) -> AppResult<Goal> {
        let mut tables = self.tables.write().await;
        tables.require_cycle(data.ciclo_id)?;
        tables.require_employee(&data.colaborador_matricula, "Colaborador não encontrado")?;

        let now = Utc::now();
        let id = tables.goals.next_id();
        let goal = Goal {
            id,
            ciclo_id: data.ciclo_id,
            colaborador_matricula: data.colaborador_matricula,
            titulo: data.titulo,
            descricao: data.descricao,
            peso: data.peso,
            data_limite: data.data_limite,
            resultado_alcancado: None,
            comentarios_gestor: None,
            criado_em: now,
            atualizado_em: now,
        };
        tables.goals.rows.insert(id, goal.clone());
        Ok(goal)
    }

    async fn update(&self, id: i32, patch: GoalPatch) -> AppResult<Goal> {
        let mut tables = self.tables.write().await;
        let goal = tables
            .goals
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Meta não encontrada"))?;
        patch.apply(goal);
        Ok(goal.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        match self.tables.write().await.goals.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Meta não encontrada")),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use avalia_core::error::ErrorKind;
    use avalia_entity::EvaluationType;

    use super::*;

    fn employee(matricula: &str, gestor: Option<&str>) -> CreateEmployee {
        CreateEmployee {
            matricula: matricula.to_string(),
            nome: format!("Colaborador {matricula}"),
            email: format!("{}@empresa.com", matricula.to_lowercase()),
            senha_hash: "hash".to_string(),
            cargo: "Analista".to_string(),
            departamento: "TI".to_string(),
            gestor_matricula: gestor.map(str::to_string),
        }
    }

    fn new_cycle(ano: i32, status: CycleStatus) -> NewCycle {
        NewCycle {
            ano,
            descricao: None,
            data_inicio: NaiveDate::from_ymd_opt(ano, 1, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(ano, 12, 31).unwrap(),
            status,
        }
    }

    fn behavioral(ciclo_id: i32, avaliado: &str, avaliador: &str) -> NewBehavioralEvaluation {
        NewBehavioralEvaluation {
            ciclo_id,
            avaliado_matricula: avaliado.to_string(),
            avaliador_matricula: avaliador.to_string(),
            tipo_avaliacao: EvaluationType::AvaliacaoGestor,
            lideranca: 4,
            comunicacao: 5,
            trabalho_equipe: 4,
            resolucao_problemas: 5,
            adaptabilidade: 4,
            comentarios: None,
        }
    }

    async fn seeded() -> (MemoryStore, Cycle) {
        let store = MemoryStore::new();
        EmployeeRepository::create(&store, employee("admin", None))
            .await
            .unwrap();
        EmployeeRepository::create(&store, employee("C001", Some("admin")))
            .await
            .unwrap();
        let cycle = CycleRepository::create(&store, new_cycle(2025, CycleStatus::EmAndamento))
            .await
            .unwrap();
        (store, cycle)
    }

    #[tokio::test]
    async fn test_duplicate_matricula_and_email_conflict() {
        let (store, _) = seeded().await;

        let err = EmployeeRepository::create(&store, employee("C001", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Matrícula já cadastrada");

        let mut other = employee("C002", None);
        other.email = "c001@empresa.com".to_string();
        let err = EmployeeRepository::create(&store, other).await.unwrap_err();
        assert_eq!(err.message, "Email já cadastrado");
    }

    #[tokio::test]
    async fn test_unknown_manager_rejected() {
        let store = MemoryStore::new();
        let err = EmployeeRepository::create(&store, employee("C001", Some("ghost")))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Gestor não encontrado");
    }

    #[tokio::test]
    async fn test_fresh_store_numbers_each_table_from_one() {
        let store = MemoryStore::new();
        let admin = EmployeeRepository::create(&store, employee("admin", None))
            .await
            .unwrap();
        let cycle = CycleRepository::create(&store, new_cycle(2025, CycleStatus::EmAndamento))
            .await
            .unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(cycle.id, 1);

        let evaluation =
            BehavioralEvaluationRepository::create(&store, behavioral(cycle.id, "admin", "admin"))
                .await
                .unwrap();
        assert_eq!(evaluation.id, 1);
    }

    #[tokio::test]
    async fn test_deactivate_twice_conflicts() {
        let (store, _) = seeded().await;
        let employee = store.deactivate("C001").await.unwrap();
        assert!(!employee.ativo);

        let err = store.deactivate("C001").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let active = EmployeeRepository::list(&store, EmployeeFilter::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        let all = EmployeeRepository::list(
            &store,
            EmployeeFilter { incluir_inativos: true },
            PageRequest::default(),
        )
        .await
        .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_subordinates_follow_manager() {
        let (store, _) = seeded().await;
        let subs = store
            .list_subordinates("admin", EmployeeFilter::default())
            .await
            .unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].matricula, "C001");
    }

    #[tokio::test]
    async fn test_active_cycle_is_latest_in_progress() {
        let (store, _) = seeded().await;
        CycleRepository::create(&store, new_cycle(2026, CycleStatus::EmAndamento))
            .await
            .unwrap();
        CycleRepository::create(&store, new_cycle(2027, CycleStatus::Planejamento))
            .await
            .unwrap();

        let active = store.find_active().await.unwrap().unwrap();
        assert_eq!(active.ano, 2026);

        let err = CycleRepository::create(&store, new_cycle(2026, CycleStatus::Planejamento))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_cycle_update_keeps_dates_ordered() {
        let (store, cycle) = seeded().await;
        let patch = CyclePatch {
            data_fim: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        let err = CycleRepository::update(&store, cycle.id, patch)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let unchanged = CycleRepository::find_by_id(&store, cycle.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.data_fim, cycle.data_fim);
    }

    #[tokio::test]
    async fn test_cycle_delete_restricted_by_evaluations() {
        let (store, cycle) = seeded().await;
        let evaluation = BehavioralEvaluationRepository::create(
            &store,
            behavioral(cycle.id, "C001", "admin"),
        )
        .await
        .unwrap();

        let err = CycleRepository::delete(&store, cycle.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        BehavioralEvaluationRepository::delete(&store, evaluation.id)
            .await
            .unwrap();
        CycleRepository::delete(&store, cycle.id).await.unwrap();
        assert!(CycleRepository::find_by_id(&store, cycle.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_evaluation_requires_existing_references() {
        let (store, cycle) = seeded().await;

        let err = BehavioralEvaluationRepository::create(&store, behavioral(99, "C001", "admin"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Ciclo não encontrado");

        let err = BehavioralEvaluationRepository::create(
            &store,
            behavioral(cycle.id, "C001", "ghost"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Colaborador avaliador não encontrado");
    }

    #[tokio::test]
    async fn test_complete_and_filter_by_status() {
        let (store, cycle) = seeded().await;
        let evaluation = BehavioralEvaluationRepository::create(
            &store,
            behavioral(cycle.id, "C001", "admin"),
        )
        .await
        .unwrap();
        assert_eq!(evaluation.status, EvaluationStatus::Pendente);
        assert_eq!(evaluation.media_competencias, 4.4);

        let done = BehavioralEvaluationRepository::complete(&store, evaluation.id)
            .await
            .unwrap();
        assert_eq!(done.status, EvaluationStatus::Concluida);

        let err = BehavioralEvaluationRepository::complete(&store, evaluation.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let pending = EvaluationFilter {
            status: Some(EvaluationStatus::Pendente),
            ..Default::default()
        };
        let listed = BehavioralEvaluationRepository::list(&store, &pending, PageRequest::default())
            .await
            .unwrap();
        assert!(listed.is_empty());

        let averages = BehavioralEvaluationRepository::averages_for(&store, "C001", cycle.id)
            .await
            .unwrap();
        assert_eq!(averages, vec![4.4]);
    }

    #[tokio::test]
    async fn test_goal_listing_pages_in_id_order() {
        let (store, cycle) = seeded().await;
        for titulo in ["Meta A", "Meta B", "Meta C"] {
            GoalRepository::create(
                &store,
                NewGoal {
                    ciclo_id: cycle.id,
                    colaborador_matricula: "C001".to_string(),
                    titulo: titulo.to_string(),
                    descricao: None,
                    peso: 10,
                    data_limite: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
                },
            )
            .await
            .unwrap();
        }

        let page = GoalRepository::list(&store, &GoalFilter::default(), PageRequest::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].titulo, "Meta B");
    }
}
