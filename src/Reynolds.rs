/// eng
/// Parameters and discretization grid of the Reynolds equation for a hydrodynamic journal bearing.
/// The task takes the bearing geometry (D, B, s), the operating conditions (F, f, eta, p_amb) and the
/// grid sizes (n_theta, n_z) and produces:
/// 1) validated, frozen parameters
/// 2) derived quantities: radius, angular speed, grid steps, number of nodes
/// 3) angular grid over [0, 2*pi) (periodic, end point excluded) and axial grid over [-B/2, B/2]
/// 4) film thickness h(epsilon, beta) on the angular grid
/// The assembly of the discrete Reynolds operator A(epsilon, beta) is not implemented yet.
/// ----------------------------------------------------------------
/// ru
/// Параметры и расчетная сетка уравнения Рейнольдса для гидродинамического радиального подшипника.
/// На вход подаются геометрия подшипника (D, B, s), режим работы (F, f, eta, p_amb) и размеры сетки
/// (n_theta, n_z); на выходе:
/// 1) проверенные неизменяемые параметры
/// 2) производные величины: радиус, угловая скорость, шаги сетки, число узлов
/// 3) угловая сетка на [0, 2*pi) (периодическая, без конечной точки) и осевая сетка на [-B/2, B/2]
/// 4) толщина смазочного слоя h(epsilon, beta) в угловых узлах
/// Сборка дискретного оператора A(epsilon, beta) пока не реализована.
/// ----------------------------------------------------------------
/// # Examples
/// ```
/// use ReynoldsFilm::Reynolds::reynolds_task::{BearingParams, Reynolds};
/// let params = BearingParams::new(0.5, 0.25, 0.1e-3, 20000.0, 5.0, 100.0, 0.0, 100, 100);
/// let rey = Reynolds::new(&params).unwrap();
/// assert_eq!(rey.n(), 10000);
/// assert_eq!(rey.z()[0], -0.125);
/// assert!(rey.A(0.5, 0.0).is_err());
/// ```
pub mod reynolds_task;

/// uniform periodic and bounded 1-D grids
pub mod grid;

/// name-keyed read-only access to the task fields
pub mod attributes;

pub mod identifier;

pub mod reynolds_error;

/// tables for the terminal
pub mod reynolds_output;
